use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use academy_core::model::BoardKind;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use storage::KeyValueStore;

use crate::context::{UiApp, build_app_context};
use crate::vm::{LOGIN_FAILED_MESSAGE, REGISTERED_MESSAGE, login_message};

use super::account::{
    AccountIntent, AccountPanel, AccountState, use_account_dispatch, use_account_state,
};
use super::board::{
    BoardFormState, BoardPanel, EMPTY_BODY_MESSAGE, use_board_form, use_board_submit,
};
use super::courses::{
    CopyButtonLabel, CopyState, CourseIntent, CoursesPanel, CoursesState, use_copy_action,
    use_copy_state, use_courses_dispatch, use_courses_state,
};
use super::quiz::{QuizIntent, QuizPanel, QuizState, use_quiz_dispatch, use_quiz_state};
use super::test_harness::{TestApp, ViewHarness, drive_dom};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Surface {
    Board(BoardKind),
    Quiz,
    Account,
    Courses,
    Copy,
}

#[derive(Clone, Default)]
struct HarnessHandles {
    board: Rc<RefCell<Option<(BoardFormState, Callback<()>)>>>,
    quiz: Rc<RefCell<Option<(QuizState, Callback<QuizIntent>)>>>,
    account: Rc<RefCell<Option<(AccountState, Callback<AccountIntent>)>>>,
    courses: Rc<RefCell<Option<(CoursesState, Callback<CourseIntent>)>>>,
    copy: Rc<RefCell<Option<(CopyState, Callback<String>)>>>,
}

impl HarnessHandles {
    fn board(&self) -> (BoardFormState, Callback<()>) {
        self.board.borrow().clone().expect("board registered")
    }

    fn quiz(&self) -> (QuizState, Callback<QuizIntent>) {
        self.quiz.borrow().clone().expect("quiz registered")
    }

    fn account(&self) -> (AccountState, Callback<AccountIntent>) {
        self.account.borrow().clone().expect("account registered")
    }

    fn courses(&self) -> (CoursesState, Callback<CourseIntent>) {
        self.courses.borrow().clone().expect("courses registered")
    }

    fn copy(&self) -> (CopyState, Callback<String>) {
        self.copy.borrow().clone().expect("copy registered")
    }
}

impl PartialEq for HarnessHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.board, &other.board)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    surface: Surface,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IntentRouterHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props);
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
    let props = use_context::<HarnessProps>();
    let handles = props.handles.clone();
    match props.surface {
        Surface::Board(kind) => rsx! { BoardHarness { kind, handles } },
        Surface::Quiz => rsx! { QuizHarness { handles } },
        Surface::Account => rsx! { AccountHarness { handles } },
        Surface::Courses => rsx! { CoursesHarness { handles } },
        Surface::Copy => rsx! { CopyHarness { handles } },
    }
}

#[component]
fn BoardHarness(kind: BoardKind, handles: HarnessHandles) -> Element {
    let form = use_board_form();
    let on_submit = use_board_submit(kind, form);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.board.borrow_mut() = Some((form, on_submit));
    }
    rsx! { BoardPanel { kind, form, on_submit } }
}

#[component]
fn QuizHarness(handles: HarnessHandles) -> Element {
    let questions = academy_core::QuestionSet::builtin();
    let state = use_quiz_state(questions);
    let dispatch = use_quiz_dispatch(questions, state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.quiz.borrow_mut() = Some((state, dispatch));
    }
    rsx! { QuizPanel { state, dispatch } }
}

#[component]
fn AccountHarness(handles: HarnessHandles) -> Element {
    let state = use_account_state();
    let dispatch = use_account_dispatch(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.account.borrow_mut() = Some((state, dispatch));
    }
    rsx! { AccountPanel { state, dispatch } }
}

#[component]
fn CoursesHarness(handles: HarnessHandles) -> Element {
    let state = use_courses_state();
    let dispatch = use_courses_dispatch(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.courses.borrow_mut() = Some((state, dispatch));
    }
    rsx! { CoursesPanel { state, dispatch } }
}

#[component]
fn CopyHarness(handles: HarnessHandles) -> Element {
    let state = use_copy_state();
    let on_copy = use_copy_action(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.copy.borrow_mut() = Some((state, on_copy));
    }
    rsx! {
        CopyButtonLabel { state, code: "print(\"hi\")".to_string(), on_copy }
    }
}

async fn setup_intent_harness(surface: Surface) -> (ViewHarness, HarnessHandles) {
    let (storage, app) = TestApp::in_memory();
    let services = app.services();
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        IntentRouterHarness,
        HarnessProps {
            app,
            surface,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness {
        dom,
        storage,
        services,
    };
    harness.settle().await;
    (harness, handles)
}

/// Let spawned handler tasks and reloaded resources finish.
async fn flush(harness: &mut ViewHarness) {
    for _ in 0..4 {
        harness.drive_async().await;
    }
}

fn fill(signal: Signal<String>, value: &str) {
    let mut signal = signal;
    signal.set(value.to_string());
}

fn text(signal: Signal<String>) -> String {
    signal.peek().clone()
}

#[tokio::test(flavor = "current_thread")]
async fn forum_post_clears_form_and_lists_entry() {
    let (mut harness, handles) = setup_intent_harness(Surface::Board(BoardKind::Forum)).await;
    let (form, submit) = handles.board();

    fill(form.name, "Ana");
    fill(form.body, "hello <b>there</b>");
    drive_dom(&mut harness.dom);
    submit.call(());
    flush(&mut harness).await;

    let entries = harness.services.forum().entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].author(), "Ana");
    assert_eq!(text(form.name), "");
    assert_eq!(text(form.body), "");
    assert_eq!(*form.notice.peek(), None);

    let html = harness.render();
    assert!(html.contains("hello &lt;b>there&lt;/b>"), "post not listed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn forum_blank_body_shows_notice_and_stores_nothing() {
    let (mut harness, handles) = setup_intent_harness(Surface::Board(BoardKind::Forum)).await;
    let (form, submit) = handles.board();

    fill(form.name, "Ana");
    fill(form.body, "   ");
    drive_dom(&mut harness.dom);
    submit.call(());
    flush(&mut harness).await;

    assert_eq!(*form.notice.peek(), Some(EMPTY_BODY_MESSAGE));
    assert_eq!(text(form.name), "Ana", "form should keep its input");
    assert!(harness.storage.kv.get_raw("forum").await.unwrap().is_none());
    let html = harness.render();
    assert!(html.contains(EMPTY_BODY_MESSAGE), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_post_keeps_role_and_resets_fields() {
    let (mut harness, handles) = setup_intent_harness(Surface::Board(BoardKind::Feedback)).await;
    let (form, submit) = handles.board();

    fill(form.name, "Budi");
    fill(form.role, "Student");
    fill(form.body, "Great material");
    drive_dom(&mut harness.dom);
    submit.call(());
    flush(&mut harness).await;

    let entries = harness.services.feedback().entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].role(), Some("Student"));
    assert_eq!(text(form.role), "");

    let html = harness.render();
    assert!(html.contains("Student"), "missing role in {html}");
    assert!(html.contains("Great material"), "missing body in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_submit_reports_unanswered_then_score() {
    let (mut harness, handles) = setup_intent_harness(Surface::Quiz).await;
    let (state, dispatch) = handles.quiz();

    dispatch.call(QuizIntent::Select {
        question: 0,
        option: 0,
    });
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);
    assert_eq!(
        state.result.peek().as_deref(),
        Some("Please answer question 2 before submitting.")
    );

    for (question, option) in [0, 1, 2, 2, 3].into_iter().enumerate() {
        dispatch.call(QuizIntent::Select { question, option });
    }
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Your score: 5/5 (100%)"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_then_failed_login_updates_status() {
    let (mut harness, handles) = setup_intent_harness(Surface::Account).await;
    let (state, dispatch) = handles.account();

    fill(state.reg_name, "Ana");
    fill(state.reg_email, "Ana@Example.com");
    fill(state.reg_password, "secret1");
    drive_dom(&mut harness.dom);
    dispatch.call(AccountIntent::Register);
    flush(&mut harness).await;

    assert_eq!(text(state.reg_name), "");
    assert_eq!(text(state.reg_email), "");
    assert_eq!(text(state.reg_password), "");
    let html = harness.render();
    assert!(html.contains(REGISTERED_MESSAGE), "missing notice in {html}");

    fill(state.login_email, "ana@example.com");
    fill(state.login_password, "secret1");
    drive_dom(&mut harness.dom);
    dispatch.call(AccountIntent::Login);
    flush(&mut harness).await;
    assert_eq!(state.status.peek().clone(), Some(login_message("Ana")));
    assert_eq!(text(state.login_password), "");

    fill(state.login_password, "wrong!!");
    drive_dom(&mut harness.dom);
    dispatch.call(AccountIntent::Login);
    flush(&mut harness).await;

    assert_eq!(state.status.peek().as_deref(), Some(LOGIN_FAILED_MESSAGE));
    assert_eq!(text(state.login_email), "ana@example.com");
    let session = harness.services.auth().current_session().await;
    assert_eq!(session.map(|s| s.name().to_owned()).as_deref(), Some("Ana"));
    let html = harness.render();
    assert!(html.contains(LOGIN_FAILED_MESSAGE), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completion_toggle_persists_and_recounts() {
    let (mut harness, handles) = setup_intent_harness(Surface::Courses).await;
    let (_, dispatch) = handles.courses();
    assert!(harness.render().contains("0 of 9 courses completed"));

    dispatch.call(CourseIntent::SetCompleted {
        course_id: "go".into(),
        completed: true,
    });
    flush(&mut harness).await;

    assert!(harness.services.catalog().progress().await.is_completed("go"));
    let html = harness.render();
    assert!(html.contains("1 of 9 courses completed"), "count not updated: {html}");

    dispatch.call(CourseIntent::SetCompleted {
        course_id: "go".into(),
        completed: false,
    });
    flush(&mut harness).await;
    assert!(harness.render().contains("0 of 9 courses completed"));
}

#[tokio::test(flavor = "current_thread")]
async fn level_select_filters_cards() {
    let (mut harness, handles) = setup_intent_harness(Surface::Courses).await;
    let (state, dispatch) = handles.courses();

    dispatch.call(CourseIntent::SelectLevel("pemula".into()));
    flush(&mut harness).await;
    let html = harness.render();
    assert_eq!(html.matches("class=\"course-card\"").count(), 4, "{html}");

    dispatch.call(CourseIntent::SelectLevel("expert".into()));
    flush(&mut harness).await;
    assert_eq!(state.level.peek().as_str(), "all");
    let html = harness.render();
    assert_eq!(html.matches("class=\"course-card\"").count(), 9, "{html}");
}

async fn advance(harness: &mut ViewHarness, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    harness.drive_async().await;
    harness.drive_async().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn copy_label_reverts_after_last_click() {
    let (mut harness, handles) = setup_intent_harness(Surface::Copy).await;
    let (state, on_copy) = handles.copy();

    on_copy.call("print(\"hi\")".to_string());
    advance(&mut harness, 0).await;
    assert!(*state.copied.peek());
    assert!(harness.render().contains("Copied ✔"));

    advance(&mut harness, 700).await;
    on_copy.call("print(\"hi\")".to_string());
    advance(&mut harness, 0).await;

    // The first click's reset has passed; the second keeps the label.
    advance(&mut harness, 700).await;
    assert!(*state.copied.peek(), "label reset by an earlier click");

    advance(&mut harness, 1000).await;
    assert!(!*state.copied.peek());
    assert!(harness.render().contains("Copy code"));
}
