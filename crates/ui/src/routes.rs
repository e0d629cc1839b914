use academy_core::model::{BoardKind, ThemeMode};
use academy_core::{RouteState, Section};
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};

use crate::app::ThemeState;
use crate::context::AppContext;
use crate::views::{AccountView, BoardView, CoursesView, HomeView, QuizView};

/// The site is a single page; every route renders the same layout and only
/// the visible section changes. `/` is the landing state, `/:target` any
/// later navigation (including ids that name no section).
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/", LandingAddress)] Landing {},
        #[route("/:target", TargetAddress)] Target { target: String },
}

impl Route {
    #[must_use]
    pub fn section(id: &str) -> Self {
        Route::Target {
            target: id.to_owned(),
        }
    }

    #[must_use]
    pub fn state(&self, ctx: &AppContext) -> RouteState {
        match self {
            Route::Landing {} => ctx.landing_state(),
            Route::Target { target } => RouteState::navigate(target),
        }
    }
}

#[component]
fn SiteLayout() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let state = route.state(&ctx);

    rsx! {
        SiteHeader { state: state.clone() }
        SiteSections { state }
        SiteFooter {}
    }
}

#[component]
fn LandingAddress() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.landing_state();
    rsx! { span { class: "address", "{state.fragment()}" } }
}

#[component]
fn TargetAddress(target: String) -> Element {
    let state = RouteState::navigate(&target);
    rsx! { span { class: "address", "{state.fragment()}" } }
}

#[component]
fn SiteHeader(state: RouteState) -> Element {
    let navigator = use_navigator();
    let ctx = use_context::<AppContext>();
    let theme = use_context::<ThemeState>();
    let mut menu_open = use_signal(|| false);

    let nav_class = if menu_open() { "main-nav open" } else { "main-nav" };
    let theme_service = ctx.services().theme();
    let toggle_label = match theme.mode() {
        ThemeMode::Dark => "Light mode",
        ThemeMode::Light => "Dark mode",
    };

    rsx! {
        header { class: "site-header",
            div { class: "brand", "Course Academy" }
            button {
                class: "menu-toggle",
                r#type: "button",
                onclick: move |_| menu_open.set(!menu_open()),
                "☰"
            }
            nav { class: "{nav_class}",
                for item in state.nav_items() {
                    button {
                        key: "{item.section.id()}",
                        r#type: "button",
                        class: if item.active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            navigator.replace(Route::section(item.section.id()));
                            menu_open.set(false);
                        },
                        "{item.section.label()}"
                    }
                }
            }
            Outlet::<Route> {}
            button {
                class: "theme-toggle",
                r#type: "button",
                onclick: move |_| {
                    let theme_service = theme_service.clone();
                    let mut selected = theme.theme;
                    let prefers_dark = theme.prefers_dark;
                    spawn(async move {
                        match theme_service.toggle(prefers_dark()).await {
                            Ok(next) => selected.set(next),
                            Err(err) => tracing::warn!(%err, "theme toggle not saved"),
                        }
                    });
                },
                "{toggle_label}"
            }
        }
    }
}

/// Every section is mounted; only the one named by `state` is shown, so form
/// input survives navigation.
#[component]
pub fn SiteSections(state: RouteState) -> Element {
    let class_for = |section: Section| {
        if state.is_visible(section) {
            "route show"
        } else {
            "route"
        }
    };

    rsx! {
        main { class: "site-main",
            section { id: "home", class: class_for(Section::Home), HomeView {} }
            section { id: "courses", class: class_for(Section::Courses), CoursesView {} }
            section { id: "quiz", class: class_for(Section::Quiz), QuizView {} }
            section { id: "forum", class: class_for(Section::Forum),
                BoardView { kind: BoardKind::Forum }
            }
            section { id: "account", class: class_for(Section::Account), AccountView {} }
            section { id: "feedback", class: class_for(Section::Feedback),
                BoardView { kind: BoardKind::Feedback }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let ctx = use_context::<AppContext>();
    let year = ctx.clock().current_year();
    rsx! {
        footer { class: "site-footer",
            p { "© {year} Course Academy" }
        }
    }
}
