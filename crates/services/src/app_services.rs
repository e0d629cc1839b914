use std::sync::Arc;

use academy_core::Catalog;
use academy_core::model::BoardKind;
use storage::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::board_service::BoardService;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::theme_service::ThemeService;

/// Assembles app-facing services over one shared store.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<CatalogService>,
    forum: Arc<BoardService>,
    feedback: Arc<BoardService>,
    auth: Arc<AuthService>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let store = storage.persistence();
        Self {
            clock,
            catalog: Arc::new(CatalogService::new(Catalog::builtin(), store.clone())),
            forum: Arc::new(BoardService::new(BoardKind::Forum, clock, store.clone())),
            feedback: Arc::new(BoardService::new(BoardKind::Feedback, clock, store.clone())),
            auth: Arc::new(AuthService::new(store.clone())),
            theme: Arc::new(ThemeService::new(store)),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn forum(&self) -> Arc<BoardService> {
        Arc::clone(&self.forum)
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<BoardService> {
        Arc::clone(&self.feedback)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
