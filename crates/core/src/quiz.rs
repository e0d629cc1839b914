//! Fixed question set and grading.

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{OPTION_COUNT, Question, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("question {} has not been answered", .0 + 1)]
    Unanswered(usize),

    #[error("question {} has no option {option}", .question + 1)]
    OptionOutOfRange { question: usize, option: usize },
}

const SEEDS: [(&str, [&str; OPTION_COUNT], usize); 5] = [
    (
        "What does HTML stand for?",
        [
            "HyperText Markup Language",
            "HighText Machine Language",
            "Hyperlinks and Text Markup Language",
            "Home Tool Markup Language",
        ],
        0,
    ),
    (
        "In JavaScript, which method prints to the console?",
        ["print()", "console.log()", "echo()", "logger()"],
        1,
    ),
    (
        "Which symbol starts a single-line comment in Python?",
        ["//", "<!-- -->", "#", "--"],
        2,
    ),
    (
        "What is CSS used for?",
        [
            "Page structure",
            "Building databases",
            "Controlling presentation",
            "Running servers",
        ],
        2,
    ),
    (
        "What is the file extension of a Java source file?",
        [".jav", ".jar", ".jv", ".java"],
        3,
    ),
];

static BUILTIN: LazyLock<QuestionSet> =
    LazyLock::new(|| QuestionSet::from_seeds(&SEEDS).expect("built-in questions are valid"));

/// Ordered questions of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Panics
    ///
    /// Panics on first use if a built-in question fails validation.
    #[must_use]
    pub fn builtin() -> &'static QuestionSet {
        &BUILTIN
    }

    fn from_seeds(seeds: &[(&str, [&str; OPTION_COUNT], usize)]) -> Result<Self, QuestionError> {
        let questions = seeds
            .iter()
            .map(|(prompt, options, correct)| {
                let options = options.iter().map(|o| (*o).to_owned()).collect();
                Question::new(*prompt, options, *correct)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Grade a fully answered quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the answer sheet does not match the question
    /// count, if any question is unanswered (the first one is reported), or if
    /// a selection is not one of the question's options.
    pub fn grade(&self, answers: &QuizAnswers) -> Result<QuizScore, QuizError> {
        if answers.selections.len() != self.questions.len() {
            return Err(QuizError::AnswerCount {
                expected: self.questions.len(),
                actual: answers.selections.len(),
            });
        }

        let mut correct = 0_u32;
        for (idx, (question, selection)) in
            self.questions.iter().zip(answers.selections.iter().copied()).enumerate()
        {
            let option = selection.ok_or(QuizError::Unanswered(idx))?;
            if option >= question.options().len() {
                return Err(QuizError::OptionOutOfRange {
                    question: idx,
                    option,
                });
            }
            if question.is_correct(option) {
                correct += 1;
            }
        }

        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(QuizScore { correct, total })
    }
}

/// One optional selection per question, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    selections: Vec<Option<usize>>,
}

impl QuizAnswers {
    /// Blank sheet for `len` questions.
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            selections: vec![None; len],
        }
    }

    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        Self {
            selections: indices.iter().copied().map(Some).collect(),
        }
    }

    /// Selecting an option replaces any previous choice for that question.
    /// Out-of-range question indices are ignored.
    pub fn select(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.selections.get_mut(question) {
            *slot = Some(option);
        }
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    correct: u32,
    total: u32,
}

impl QuizScore {
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whole percentage, rounded half up.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 200 + self.total) / (self.total * 2)
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.percent())
    }
}
