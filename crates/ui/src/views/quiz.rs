use academy_core::{QuestionSet, QuizAnswers};
use dioxus::prelude::*;

use crate::vm::{map_questions, quiz_result_message};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QuizIntent {
    Select { question: usize, option: usize },
    Submit,
}

/// Answers and the last result live only in the view; nothing is persisted.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct QuizState {
    pub answers: Signal<QuizAnswers>,
    pub result: Signal<Option<String>>,
}

pub(crate) fn use_quiz_state(questions: &'static QuestionSet) -> QuizState {
    QuizState {
        answers: use_signal(|| QuizAnswers::blank(questions.len())),
        result: use_signal(|| None),
    }
}

pub(crate) fn use_quiz_dispatch(questions: &'static QuestionSet, state: QuizState) -> Callback<QuizIntent> {
    use_callback(move |intent: QuizIntent| {
        let QuizState {
            mut answers,
            mut result,
        } = state;
        match intent {
            QuizIntent::Select { question, option } => answers.write().select(question, option),
            QuizIntent::Submit => {
                let graded = questions.grade(&answers.peek());
                if let Ok(score) = &graded {
                    tracing::info!(%score, "quiz graded");
                }
                result.set(Some(quiz_result_message(&graded)));
            }
        }
    })
}

/// Fixed five-question quiz.
#[component]
pub fn QuizView() -> Element {
    let questions = QuestionSet::builtin();
    let state = use_quiz_state(questions);
    let dispatch = use_quiz_dispatch(questions, state);
    rsx! { QuizPanel { state, dispatch } }
}

#[component]
pub(crate) fn QuizPanel(state: QuizState, dispatch: Callback<QuizIntent>) -> Element {
    let questions = QuestionSet::builtin();
    let QuizState { answers, result } = state;

    rsx! {
        div { class: "page quiz",
            h2 { "Quiz" }
            form {
                id: "quiz-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Submit);
                },
                for question in map_questions(questions) {
                    fieldset { key: "{question.index}", class: "question",
                        legend { "{question.prompt}" }
                        for (option_index, option) in question.options.iter().enumerate() {
                            label { class: "option",
                                input {
                                    r#type: "radio",
                                    name: "q{question.index}",
                                    value: "{option_index}",
                                    checked: answers.read().selected(question.index) == Some(option_index),
                                    onchange: move |_| dispatch.call(QuizIntent::Select {
                                        question: question.index,
                                        option: option_index,
                                    }),
                                }
                                " {option}"
                            }
                        }
                    }
                }
                button { class: "btn primary", r#type: "submit", "Submit answers" }
            }
            if let Some(message) = result() {
                p { id: "quiz-result", class: "quiz-result", "{message}" }
            }
        }
    }
}
