use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Shortest password accepted at registration, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccountError {
    #[error("name cannot be empty")]
    MissingName,

    #[error("email cannot be empty")]
    MissingEmail,

    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

/// Trimmed, lower-cased email. The unique key of the user map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalizes raw input; the result may be empty.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A locally registered user. The password is stored as typed; this is a
/// simulation, not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    name: String,
    email: Email,
    #[serde(rename = "pass")]
    password: String,
}

impl UserAccount {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Users keyed by normalized email, as stored under `users`.
pub type UserDirectory = BTreeMap<Email, UserAccount>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate the form fields and build the account to insert.
    ///
    /// Uniqueness of the email is checked by the caller against the stored
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` if the name or email is blank or the password is
    /// shorter than `MIN_PASSWORD_LEN`.
    pub fn validate(self) -> Result<UserAccount, AccountError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccountError::MissingName);
        }
        let email = Email::normalize(&self.email);
        if email.is_empty() {
            return Err(AccountError::MissingEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::PasswordTooShort);
        }

        Ok(UserAccount {
            name: name.to_owned(),
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> Email {
        Email::normalize(&self.email)
    }

    /// Returns the account only if it exists and the password is an exact match.
    #[must_use]
    pub fn authenticate<'a>(&self, users: &'a UserDirectory) -> Option<&'a UserAccount> {
        users
            .get(&self.email())
            .filter(|account| account.password_matches(&self.password))
    }
}

/// The single signed-in user, stored under `session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    email: Email,
    name: String,
}

impl Session {
    #[must_use]
    pub fn for_account(account: &UserAccount) -> Self {
        Self {
            email: account.email.clone(),
            name: account.name.clone(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
