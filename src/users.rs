use crate::db::models::{NewUser, User, UserPatch, DEFAULT_ROLE};
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::storage::{keys, Storage};

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Generated initials avatar for `name`.
pub fn avatar_url(name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .append_pair("background", "6366f1")
        .append_pair("color", "fff")
        .append_pair("size", "128")
        .finish();
    format!("{}?{}", AVATAR_BASE, query)
}

/// Fields a user may change on their own profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub fullname: String,
    pub bio: String,
    pub role: String,
    pub avatar: Option<String>,
}

/// Users and the current session, kept in the shared store.
#[derive(Clone)]
pub struct UserRepository {
    pub(crate) storage: Storage,
    ids: IdGenerator,
}

impl UserRepository {
    pub fn new(storage: Storage, ids: IdGenerator) -> Self {
        Self { storage, ids }
    }

    /// All registered users in registration order.
    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.storage.get_or_default(keys::USERS)
    }

    pub fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.list_users()?.into_iter().find(|u| u.id == id))
    }

    pub fn register_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.list_users()?;
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::DuplicateEmail(new_user.email));
        }

        let user = User {
            id: self.ids.next_id()?,
            avatar: avatar_url(&new_user.fullname),
            fullname: new_user.fullname,
            email: new_user.email,
            password: new_user.password,
            role: new_user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            bio: String::new(),
            followers: 0,
            following: 0,
            articles: 0,
        };

        users.push(user.clone());
        self.storage.set(keys::USERS, &users)?;
        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// First user whose email and password both match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }

    /// Apply a profile edit to the signed-in user.
    pub fn update_profile(&self, update: ProfileUpdate) -> AppResult<User> {
        let fullname = update.fullname.trim();
        if fullname.is_empty() {
            return Err(AppError::MissingField("fullname"));
        }

        let patch = UserPatch {
            fullname: Some(fullname.to_string()),
            bio: Some(update.bio),
            role: Some(update.role),
            avatar: update.avatar,
            ..Default::default()
        };

        self.update_session(patch)?.ok_or(AppError::NoActiveSession)
    }
}
