use academy_core::model::{LoginDraft, RegistrationDraft};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{
    LOGGED_OUT_MESSAGE, LOGIN_FAILED_MESSAGE, REGISTERED_MESSAGE, login_message,
    register_error_message, signed_in_message,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AccountIntent {
    Register,
    Login,
    Logout,
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct AccountState {
    pub reg_name: Signal<String>,
    pub reg_email: Signal<String>,
    pub reg_password: Signal<String>,
    pub reg_notice: Signal<Option<String>>,
    pub login_email: Signal<String>,
    pub login_password: Signal<String>,
    pub status: Signal<Option<String>>,
}

/// Form signals, with the status line seeded from any stored session.
pub(crate) fn use_account_state() -> AccountState {
    let ctx = use_context::<AppContext>();
    let state = AccountState {
        reg_name: use_signal(String::new),
        reg_email: use_signal(String::new),
        reg_password: use_signal(String::new),
        reg_notice: use_signal(|| None),
        login_email: use_signal(String::new),
        login_password: use_signal(String::new),
        status: use_signal(|| None),
    };

    let auth = ctx.services().auth();
    let mut status = state.status;
    use_future(move || {
        let auth = auth.clone();
        async move {
            if let Some(session) = auth.current_session().await {
                status.set(Some(signed_in_message(session.name())));
            }
        }
    });

    state
}

pub(crate) fn use_account_dispatch(state: AccountState) -> Callback<AccountIntent> {
    let ctx = use_context::<AppContext>();
    let auth = ctx.services().auth();

    use_callback(move |intent: AccountIntent| {
        let AccountState {
            mut reg_name,
            mut reg_email,
            mut reg_password,
            mut reg_notice,
            login_email,
            mut login_password,
            mut status,
        } = state;
        let auth = auth.clone();
        match intent {
            AccountIntent::Register => {
                let draft = RegistrationDraft::new(
                    reg_name.peek().clone(),
                    reg_email.peek().clone(),
                    reg_password.peek().clone(),
                );
                spawn(async move {
                    match auth.register(draft).await {
                        Ok(_) => {
                            reg_name.set(String::new());
                            reg_email.set(String::new());
                            reg_password.set(String::new());
                            reg_notice.set(Some(REGISTERED_MESSAGE.to_owned()));
                        }
                        Err(err) => reg_notice.set(Some(register_error_message(&err).to_owned())),
                    }
                });
            }
            AccountIntent::Login => {
                let draft = LoginDraft::new(login_email.peek().clone(), login_password.peek().clone());
                spawn(async move {
                    match auth.login(draft).await {
                        Ok(session) => {
                            login_password.set(String::new());
                            status.set(Some(login_message(session.name())));
                        }
                        Err(_) => status.set(Some(LOGIN_FAILED_MESSAGE.to_owned())),
                    }
                });
            }
            AccountIntent::Logout => {
                spawn(async move {
                    match auth.logout().await {
                        Ok(()) => status.set(Some(LOGGED_OUT_MESSAGE.to_owned())),
                        Err(err) => tracing::warn!(%err, "logout not saved"),
                    }
                });
            }
        }
    })
}

#[component]
pub fn AccountView() -> Element {
    let state = use_account_state();
    let dispatch = use_account_dispatch(state);
    rsx! { AccountPanel { state, dispatch } }
}

#[component]
pub(crate) fn AccountPanel(state: AccountState, dispatch: Callback<AccountIntent>) -> Element {
    let AccountState {
        mut reg_name,
        mut reg_email,
        mut reg_password,
        reg_notice,
        mut login_email,
        mut login_password,
        status,
    } = state;

    rsx! {
        div { class: "page account",
            h2 { "Account" }
            div { class: "account-grid",
                form {
                    class: "card",
                    id: "register-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch.call(AccountIntent::Register);
                    },
                    h3 { "Register" }
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: "{reg_name}",
                        oninput: move |evt| reg_name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{reg_email}",
                        oninput: move |evt| reg_email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password (min. 6 characters)",
                        value: "{reg_password}",
                        oninput: move |evt| reg_password.set(evt.value()),
                    }
                    button { class: "btn primary", r#type: "submit", "Register" }
                    if let Some(notice) = reg_notice() {
                        p { class: "notice", "{notice}" }
                    }
                }
                form {
                    class: "card",
                    id: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch.call(AccountIntent::Login);
                    },
                    h3 { "Log in" }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{login_email}",
                        oninput: move |evt| login_email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{login_password}",
                        oninput: move |evt| login_password.set(evt.value()),
                    }
                    div { class: "row",
                        button { class: "btn primary", r#type: "submit", "Log in" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| dispatch.call(AccountIntent::Logout),
                            "Log out"
                        }
                    }
                }
            }
            if let Some(message) = status() {
                p { id: "login-status", class: "status", "{message}" }
            }
        }
    }
}
