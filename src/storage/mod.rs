mod memory;
mod seed;
mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::db::models::{Post, User};
use crate::error::{AppError, AppResult};
use crate::state::DbPool;

pub use self::memory::MemoryStore;
pub use self::seed::default_posts;
pub use self::sqlite::SqliteStore;

/// Names of the records kept in the store.
pub mod keys {
    pub const USERS: &str = "blogapp_users";
    pub const CURRENT_USER: &str = "blogapp_current_user";
    pub const POSTS: &str = "blogapp_posts";
    pub const LAST_ID: &str = "blogapp_last_id";
}

/// Raw string key-value backend. Every call is durable on return.
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    fn set_raw(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;

    /// Write several keys so that a later read sees all of them or none.
    fn set_many(&self, entries: &[(&str, String)]) -> AppResult<()>;
}

/// Typed view over a [`KeyValueStore`]; values are stored as JSON.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn sqlite(pool: DbPool) -> Self {
        Self::new(SqliteStore::new(pool))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Read and decode `key`. Data that does not parse is reported, never skipped.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.backend.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| AppError::MalformedStoreData {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> AppResult<T> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, &raw)
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.backend.remove(key)
    }

    /// Store `value` under `key` unless something is already there.
    /// Returns whether the default was written.
    pub fn ensure_default<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<bool> {
        if self.backend.get_raw(key)?.is_some() {
            return Ok(false);
        }
        self.set(key, value)?;
        Ok(true)
    }

    /// Atomically write two keys.
    pub fn set_pair<A, B>(&self, first: (&str, &A), second: (&str, &B)) -> AppResult<()>
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let entries = [
            (first.0, serde_json::to_string(first.1)?),
            (second.0, serde_json::to_string(second.1)?),
        ];
        self.backend.set_many(&entries)
    }
}

/// Seed the user list (empty) and the post list (example articles) on first run.
pub fn initialize(storage: &Storage) -> AppResult<()> {
    if storage.ensure_default(keys::USERS, &Vec::<User>::new())? {
        tracing::info!("Initialized empty user list");
    }
    let posts: Vec<Post> = default_posts();
    if storage.ensure_default(keys::POSTS, &posts)? {
        tracing::info!("Seeded {} example posts", posts.len());
    }
    Ok(())
}
