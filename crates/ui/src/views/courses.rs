use std::time::Duration;

use academy_core::CourseFilter;
use academy_core::model::{Level, LevelFilter};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::scripts::copy_text;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, completion_label, map_course_cards};

pub(crate) const COPY_CONFIRM: Duration = Duration::from_millis(1200);

#[derive(Clone, Debug, PartialEq)]
struct CoursesData {
    cards: Vec<CourseCardVm>,
    completion: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CourseIntent {
    Search(String),
    /// Level token from the select; unknown tokens behave like "all".
    SelectLevel(String),
    SetCompleted { course_id: String, completed: bool },
}

/// Filter inputs plus a counter bumped after each saved toggle.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct CoursesState {
    pub query: Signal<String>,
    pub level: Signal<LevelFilter>,
    pub saved: Signal<u32>,
}

pub(crate) fn use_courses_state() -> CoursesState {
    CoursesState {
        query: use_signal(String::new),
        level: use_signal(LevelFilter::default),
        saved: use_signal(|| 0),
    }
}

pub(crate) fn use_courses_dispatch(state: CoursesState) -> Callback<CourseIntent> {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.services().catalog();

    use_callback(move |intent: CourseIntent| {
        let CoursesState {
            mut query,
            mut level,
            mut saved,
        } = state;
        match intent {
            CourseIntent::Search(text) => query.set(text),
            CourseIntent::SelectLevel(token) => level.set(token.parse().unwrap_or_default()),
            CourseIntent::SetCompleted {
                course_id,
                completed,
            } => {
                let catalog = catalog.clone();
                spawn(async move {
                    if let Err(err) = catalog.set_completed(&course_id, completed).await {
                        tracing::warn!(%err, course_id, "progress not saved");
                    }
                    saved += 1;
                });
            }
        }
    })
}

#[component]
pub fn CoursesView() -> Element {
    let state = use_courses_state();
    let dispatch = use_courses_dispatch(state);
    rsx! { CoursesPanel { state, dispatch } }
}

#[component]
pub(crate) fn CoursesPanel(state: CoursesState, dispatch: Callback<CourseIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.services().catalog();
    let CoursesState { query, level, saved } = state;
    let level_token = level().as_str();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let filter = CourseFilter::new(&query.read(), level());
        let _ = saved();
        async move {
            let cards = catalog.list(&filter).await;
            let (completed, total) = catalog.completion().await;
            Ok::<_, ViewError>(CoursesData {
                cards: map_course_cards(&cards),
                completion: completion_label(completed, total),
            })
        }
    });

    rsx! {
        div { class: "page courses",
            h2 { "Courses" }
            div { class: "filters",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search courses",
                    value: "{query}",
                    oninput: move |evt| dispatch.call(CourseIntent::Search(evt.value())),
                }
                select {
                    class: "level",
                    value: level_token,
                    onchange: move |evt| dispatch.call(CourseIntent::SelectLevel(evt.value())),
                    option { value: "all", "All levels" }
                    for option_level in Level::ALL {
                        option { value: option_level.as_str(), "{option_level.label()}" }
                    }
                }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading courses..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "progress-count", "{data.completion}" }
                    if data.cards.is_empty() {
                        p { class: "muted", "No courses match your search." }
                    }
                    div { class: "course-grid",
                        for card in data.cards {
                            CourseCardView { key: "{card.id}", card, dispatch }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCardView(card: CourseCardVm, dispatch: Callback<CourseIntent>) -> Element {
    let checkbox_id = format!("done-{}", card.id);
    let course_id = card.id.clone();

    rsx! {
        article { class: "course-card", "data-level": card.level_token,
            h3 { "{card.name}" }
            span { class: "badge {card.level_token}", "{card.level_label}" }
            p { "{card.description}" }
            pre { class: "sample", code { "{card.sample_code}" } }
            div { class: "card-actions",
                label { r#for: "{checkbox_id}",
                    input {
                        id: "{checkbox_id}",
                        r#type: "checkbox",
                        checked: card.completed,
                        onchange: move |evt| dispatch.call(CourseIntent::SetCompleted {
                            course_id: course_id.clone(),
                            completed: evt.checked(),
                        }),
                    }
                    " Completed"
                }
                CopyButton { code: card.sample_code.clone() }
            }
        }
    }
}

/// Confirmation label of one copy button. Each click bumps `generation`;
/// a pending reset only applies to the click that scheduled it.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct CopyState {
    pub copied: Signal<bool>,
    pub generation: Signal<u64>,
}

pub(crate) fn use_copy_state() -> CopyState {
    CopyState {
        copied: use_signal(|| false),
        generation: use_signal(|| 0),
    }
}

pub(crate) fn use_copy_action(state: CopyState) -> Callback<String> {
    use_callback(move |code: String| {
        let CopyState {
            mut copied,
            mut generation,
        } = state;
        generation += 1;
        let clicked = *generation.peek();
        spawn(async move {
            copy_text(&code).await;
            copied.set(true);
            tokio::time::sleep(COPY_CONFIRM).await;
            if *generation.peek() == clicked {
                copied.set(false);
            }
        });
    })
}

#[component]
fn CopyButton(code: String) -> Element {
    let state = use_copy_state();
    let on_copy = use_copy_action(state);
    rsx! { CopyButtonLabel { state, code, on_copy } }
}

#[component]
pub(crate) fn CopyButtonLabel(state: CopyState, code: String, on_copy: Callback<String>) -> Element {
    let label = if (state.copied)() { "Copied ✔" } else { "Copy code" };

    rsx! {
        button {
            class: "btn copy",
            r#type: "button",
            onclick: move |_| on_copy.call(code.clone()),
            "{label}"
        }
    }
}
