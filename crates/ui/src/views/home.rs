use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page hero",
            h1 { "Learn to code, one course at a time" }
            p { class: "tagline",
                "Short introductions to nine popular languages, a quick quiz, and a forum to ask questions."
            }
            div { class: "hero-actions",
                button {
                    class: "btn primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.replace(Route::section("courses"));
                    },
                    "Browse courses"
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.replace(Route::section("quiz"));
                    },
                    "Take the quiz"
                }
            }
            div { class: "highlights",
                div { class: "highlight",
                    h3 { "Beginner friendly" }
                    p { "Start with HTML, CSS, JavaScript or Python." }
                }
                div { class: "highlight",
                    h3 { "Track progress" }
                    p { "Tick off courses as you finish them. Progress stays on this device." }
                }
                div { class: "highlight",
                    h3 { "Community" }
                    p { "Post questions in the forum and leave feedback." }
                }
            }
        }
    }
}
