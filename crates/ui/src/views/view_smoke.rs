use academy_core::model::{BoardDraft, BoardKind, LoginDraft, RegistrationDraft};
use storage::KeyValueStore;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_calls_to_action() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Browse courses"), "missing CTA in {html}");
    assert!(html.contains("Take the quiz"), "missing CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_lists_catalog_with_progress() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness
        .services
        .catalog()
        .set_completed("python", true)
        .await
        .expect("mark python");

    harness.settle().await;
    let html = harness.render();
    for name in ["HTML", "JavaScript", "Python", "C#", "Go"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(
        html.contains("1 of 9 courses completed"),
        "missing completion count in {html}"
    );
    assert!(html.contains("Copy code"), "missing copy button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_ignores_corrupt_progress() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness
        .storage
        .kv
        .set_raw("progress", "{not json".into())
        .await
        .expect("seed corrupt value");

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("0 of 9 courses completed"),
        "corrupt progress should read as empty: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_five_questions() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("<fieldset").count(), 5, "{html}");
    assert_eq!(html.matches("type=\"radio\"").count(), 20, "{html}");
    assert!(!html.contains("Your score"), "no result before submit: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn forum_view_smoke_renders_newest_first_with_escaped_markup() {
    let mut harness = setup_view_harness(ViewKind::Board(BoardKind::Forum));
    let forum = harness.services.forum();
    forum
        .submit(BoardDraft::new("Ana", "<b>first</b>"))
        .await
        .expect("first post");
    forum
        .submit(BoardDraft::new("", "second"))
        .await
        .expect("second post");

    harness.settle().await;
    let html = harness.render();
    let first = html.find("&lt;b>first&lt;/b>").expect("escaped first post");
    let second = html.find("second").expect("second post");
    assert!(second < first, "newest post should come first: {html}");
    assert!(html.contains("Anonymous"), "missing default author in {html}");
    assert!(!html.contains("<b>first"), "raw markup leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_shows_role() {
    let mut harness = setup_view_harness(ViewKind::Board(BoardKind::Feedback));
    harness
        .services
        .feedback()
        .submit(BoardDraft::new("Budi", "Great material").with_role("Student"))
        .await
        .expect("feedback");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Budi"), "missing author in {html}");
    assert!(html.contains("Student"), "missing role in {html}");
    assert!(html.contains("Great material"), "missing body in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn account_view_smoke_greets_existing_session() {
    let mut harness = setup_view_harness(ViewKind::Account);
    let auth = harness.services.auth();
    auth.register(RegistrationDraft::new("Ana", "ana@example.com", "secret1"))
        .await
        .expect("register");
    auth.login(LoginDraft::new("ana@example.com", "secret1"))
        .await
        .expect("login");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Signed in as Ana"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sections_smoke_show_only_the_target() {
    let mut harness = setup_view_harness(ViewKind::Sections("quiz"));
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("route show").count(), 1, "{html}");
    assert!(
        html.contains(r#"id="quiz" class="route show""#),
        "quiz should be visible: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn sections_smoke_hide_everything_for_unknown_target() {
    let mut harness = setup_view_harness(ViewKind::Sections("nowhere"));
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("route show"), "nothing should be visible: {html}");
    assert_eq!(html.matches("class=\"route\"").count(), 6, "{html}");
}
