pub mod registration;
mod session;

pub use registration::{is_valid_email, RegistrationForm};
