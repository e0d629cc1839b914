use std::sync::Arc;

use academy_core::model::BoardKind;
use academy_core::time::fixed_now;
use academy_core::RouteState;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::SiteSections;
use crate::views::{AccountView, BoardView, CoursesView, HomeView, QuizView};

#[derive(Clone)]
pub struct TestApp {
    services: AppServices,
}

impl TestApp {
    /// In-memory storage with services on a fixed clock.
    pub fn in_memory() -> (Storage, Arc<TestApp>) {
        let storage = Storage::in_memory();
        let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()));
        (storage, Arc::new(TestApp { services }))
    }
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn initial_fragment(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Courses,
    Quiz,
    Board(BoardKind),
    Account,
    Sections(&'static str),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Board(kind) => rsx! { BoardView { kind } },
        ViewKind::Account => rsx! { AccountView {} },
        ViewKind::Sections(target) => rsx! {
            SiteSections { state: RouteState::navigate(target) }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let resource futures finish.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let (storage, app) = TestApp::in_memory();
    let services = app.services();

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        services,
    }
}
