use academy_core::model::Theme;
use storage::{Persistence, StoreKey};

use crate::error::ThemeServiceError;

#[derive(Clone)]
pub struct ThemeService {
    store: Persistence,
}

impl ThemeService {
    #[must_use]
    pub fn new(store: Persistence) -> Self {
        Self { store }
    }

    /// Stored preference, `Theme::Auto` if unset or unreadable.
    pub async fn load(&self) -> Theme {
        self.store.get(StoreKey::Theme, Theme::Auto).await
    }

    /// Flip the shown mode and persist the explicit choice.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError::Storage` if the stored theme cannot be
    /// read or the write fails.
    pub async fn toggle(&self, prefers_dark: bool) -> Result<Theme, ThemeServiceError> {
        self.store
            .update(StoreKey::Theme, Theme::Auto, |theme: &mut Theme| {
                *theme = theme.toggled(prefers_dark);
                Ok::<_, ThemeServiceError>(*theme)
            })
            .await
    }
}
