use academy_core::model::{BoardDraft, BoardKind};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BoardEntryVm, map_board_entries};

pub(crate) const EMPTY_BODY_MESSAGE: &str = "Please write a message first.";

/// Form fields of one board. `posted` is bumped after every stored entry so
/// the list reloads.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct BoardFormState {
    pub name: Signal<String>,
    pub role: Signal<String>,
    pub body: Signal<String>,
    pub notice: Signal<Option<&'static str>>,
    pub posted: Signal<u32>,
}

pub(crate) fn use_board_form() -> BoardFormState {
    BoardFormState {
        name: use_signal(String::new),
        role: use_signal(String::new),
        body: use_signal(String::new),
        notice: use_signal(|| None),
        posted: use_signal(|| 0),
    }
}

/// Submit handler: stores the draft, then clears the form or shows a notice.
pub(crate) fn use_board_submit(kind: BoardKind, form: BoardFormState) -> Callback<()> {
    let ctx = use_context::<AppContext>();
    let board = match kind {
        BoardKind::Forum => ctx.services().forum(),
        BoardKind::Feedback => ctx.services().feedback(),
    };

    use_callback(move |()| {
        let BoardFormState {
            mut name,
            mut role,
            mut body,
            mut notice,
            mut posted,
        } = form;
        let mut draft = BoardDraft::new(name.peek().clone(), body.peek().clone());
        if kind.has_role() {
            draft = draft.with_role(role.peek().clone());
        }
        let board = board.clone();
        spawn(async move {
            match board.submit(draft).await {
                Ok(Some(_)) => {
                    name.set(String::new());
                    role.set(String::new());
                    body.set(String::new());
                    notice.set(None);
                    posted += 1;
                }
                Ok(None) => notice.set(Some(EMPTY_BODY_MESSAGE)),
                Err(err) => {
                    tracing::warn!(%err, board = kind.as_str(), "board entry not saved");
                    notice.set(Some(ViewError::Unknown.message()));
                }
            }
        });
    })
}

/// Forum or feedback board: an entry form above the posts, newest first.
#[component]
pub fn BoardView(kind: BoardKind) -> Element {
    let form = use_board_form();
    let on_submit = use_board_submit(kind, form);
    rsx! { BoardPanel { kind, form, on_submit } }
}

#[component]
pub(crate) fn BoardPanel(kind: BoardKind, form: BoardFormState, on_submit: Callback<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let board = match kind {
        BoardKind::Forum => ctx.services().forum(),
        BoardKind::Feedback => ctx.services().feedback(),
    };
    let BoardFormState {
        mut name,
        mut role,
        mut body,
        notice,
        posted,
    } = form;

    let resource = use_resource(move || {
        let board = board.clone();
        let _ = posted();
        async move {
            let entries = board.newest_first().await;
            Ok::<_, ViewError>(map_board_entries(kind, &entries))
        }
    });

    let (title, body_label, submit_label) = match kind {
        BoardKind::Forum => ("Forum", "Message", "Post"),
        BoardKind::Feedback => ("Feedback", "Your feedback", "Send feedback"),
    };

    rsx! {
        div { class: "page board {kind.as_str()}",
            h2 { "{title}" }
            form {
                class: "board-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                input {
                    r#type: "text",
                    placeholder: "Name (optional)",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                if kind.has_role() {
                    input {
                        r#type: "text",
                        placeholder: "Role (optional)",
                        value: "{role}",
                        oninput: move |evt| role.set(evt.value()),
                    }
                }
                textarea {
                    placeholder: "{body_label}",
                    value: "{body}",
                    oninput: move |evt| body.set(evt.value()),
                }
                button { class: "btn primary", r#type: "submit", "{submit_label}" }
                if let Some(message) = notice() {
                    p { class: "error", "{message}" }
                }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(entries) => rsx! {
                    div { class: "board-list",
                        for (idx, entry) in entries.into_iter().enumerate() {
                            BoardEntryItem { key: "{idx}", entry }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BoardEntryItem(entry: BoardEntryVm) -> Element {
    rsx! {
        div { class: "board-item",
            div { class: "board-meta",
                strong { "{entry.author}" }
                if !entry.detail.is_empty() {
                    " • {entry.detail}"
                }
            }
            div { class: "board-body", dangerous_inner_html: "{entry.body_markup}" }
        }
    }
}
