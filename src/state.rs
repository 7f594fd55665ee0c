use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::error::AppResult;
use crate::ids::IdGenerator;
use crate::posts::PostRepository;
use crate::storage::{initialize, Storage};
use crate::users::UserRepository;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Everything a front end needs: the typed repositories over one store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: UserRepository,
    pub posts: PostRepository,
}

impl AppState {
    /// Wire the repositories over `storage`, seeding default data on first run.
    pub fn new(storage: Storage, config: Config) -> AppResult<Self> {
        initialize(&storage)?;

        let ids = IdGenerator::new(storage.clone());
        let users = UserRepository::new(storage.clone(), ids.clone());
        let posts = PostRepository::new(storage, ids, users.clone());

        Ok(Self {
            config,
            users,
            posts,
        })
    }
}
