use crate::db::models::{NewUser, DEFAULT_ROLE};
use crate::error::{AppError, AppResult};

/// Raw sign-up input as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(self) -> AppResult<NewUser> {
        let required = [
            ("fullname", &self.fullname),
            ("email", &self.email),
            ("password", &self.password),
            ("confirm_password", &self.confirm_password),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(AppError::MissingField(*name));
        }

        if !is_valid_email(&self.email) {
            return Err(AppError::InvalidEmail(self.email));
        }

        if self.password != self.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        Ok(NewUser {
            fullname: self.fullname,
            email: self.email,
            password: self.password,
            role: Some(DEFAULT_ROLE.to_string()),
        })
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
