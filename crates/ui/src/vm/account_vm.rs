use academy_core::model::AccountError;
use services::AuthServiceError;

pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your email / password.";
pub const LOGGED_OUT_MESSAGE: &str = "You are logged out.";

#[must_use]
pub fn login_message(name: &str) -> String {
    format!("Login successful. Hi, {name}!")
}

#[must_use]
pub fn signed_in_message(name: &str) -> String {
    format!("Signed in as {name}")
}

#[must_use]
pub fn register_error_message(err: &AuthServiceError) -> &'static str {
    match err {
        AuthServiceError::Account(AccountError::PasswordTooShort) => {
            "Password must be at least 6 characters."
        }
        AuthServiceError::Account(_) => "Please fill in your name and email.",
        AuthServiceError::DuplicateEmail => "This email is already registered.",
        _ => "Something went wrong. Please try again.",
    }
}
