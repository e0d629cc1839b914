//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::AccountError;
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `BoardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BoardServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
///
/// `InvalidCredentials` deliberately does not say whether the email or the
/// password was wrong.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("login failed")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
