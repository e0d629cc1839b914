use std::sync::Arc;

use academy_core::RouteState;
use services::{AppServices, Clock};

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// Section id requested at launch, if any (with or without a leading `#`).
    fn initial_fragment(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    initial_fragment: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            initial_fragment: app.initial_fragment(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.services.clock()
    }

    /// Where the site lands before any navigation happened.
    #[must_use]
    pub fn landing_state(&self) -> RouteState {
        RouteState::initial(self.initial_fragment.as_deref())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
