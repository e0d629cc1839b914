use academy_core::model::{Theme, ThemeMode};
use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::prefers_dark_scheme;

/// Stored preference plus the platform hint it resolves against.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
    pub prefers_dark: Signal<bool>,
}

impl ThemeState {
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        (self.theme)().resolve((self.prefers_dark)())
    }
}

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = use_signal(Theme::default);
    let prefers_dark = use_signal(|| false);
    let theme_state = use_context_provider(|| ThemeState {
        theme,
        prefers_dark,
    });

    let theme_service = ctx.services().theme();
    use_future(move || {
        let theme_service = theme_service.clone();
        let mut theme = theme;
        let mut prefers_dark = prefers_dark;
        async move {
            theme.set(theme_service.load().await);
            prefers_dark.set(prefers_dark_scheme().await);
        }
    });

    let root_class = format!("app-root {}", theme_state.mode().css_class());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Course Academy" }

        div { class: "{root_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
