use crate::db::models::{User, UserPatch};
use crate::error::{AppError, AppResult};
use crate::storage::keys;
use crate::users::UserRepository;

impl UserRepository {
    /// The signed-in user's snapshot, or `None` when anonymous.
    pub fn get_session(&self) -> AppResult<Option<User>> {
        self.storage.get(keys::CURRENT_USER)
    }

    pub fn set_session(&self, user: &User) -> AppResult<()> {
        self.storage.set(keys::CURRENT_USER, user)
    }

    /// Merge `patch` into the session and the matching user-list entry.
    ///
    /// Both records are written in one store transaction. Returns `None`
    /// when nobody is signed in.
    pub fn update_session(&self, patch: UserPatch) -> AppResult<Option<User>> {
        let Some(current) = self.get_session()? else {
            tracing::debug!("Session update skipped: no active session");
            return Ok(None);
        };

        let updated = patch.apply(current);
        let mut users = self.list_users()?;

        match users.iter_mut().find(|u| u.id == updated.id) {
            Some(slot) => {
                *slot = updated.clone();
                self.storage
                    .set_pair((keys::CURRENT_USER, &updated), (keys::USERS, &users))?;
            }
            None => {
                tracing::warn!("Session user {} missing from user list", updated.id);
                self.set_session(&updated)?;
            }
        }

        Ok(Some(updated))
    }

    /// Drop the session. The user list is left alone.
    pub fn clear_session(&self) -> AppResult<()> {
        self.storage.remove(keys::CURRENT_USER)
    }

    /// Authenticate and start a session.
    pub fn login(&self, email: &str, password: &str) -> AppResult<User> {
        match self.authenticate(email, password)? {
            Some(user) => {
                self.set_session(&user)?;
                tracing::info!("User {} signed in", user.id);
                Ok(user)
            }
            None => {
                tracing::warn!("Failed sign-in attempt for {}", email);
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
