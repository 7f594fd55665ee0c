#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session")]
    NoActiveSession,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Please enter a valid email: {0}")]
    InvalidEmail(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Maximum {max} tags allowed, got {got}")]
    TooManyTags { max: usize, got: usize },

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Malformed data stored under '{key}': {source}")]
    MalformedStoreData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for the command-line front end.
    ///
    /// Caller mistakes get distinct codes; storage failures all collapse to
    /// a generic failure and are logged here.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidEmail(_)
            | AppError::PasswordMismatch
            | AppError::TooManyTags { .. } => 2,
            AppError::DuplicateEmail(_) => 3,
            AppError::InvalidCredentials | AppError::NoActiveSession => 4,
            AppError::PostNotFound(_) => 5,
            AppError::MalformedStoreData { key, source } => {
                tracing::error!("Malformed store data under {}: {}", key, source);
                70
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                70
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                70
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {}", e);
                70
            }
        }
    }

    /// Message safe to show to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MalformedStoreData { .. }
            | AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Json(_) => "Something went wrong reading local data".to_string(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
