use thiserror::Error;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("expected {OPTION_COUNT} options, got {0}")]
    OptionCount(usize),

    #[error("option {0} is empty")]
    EmptyOption(usize),

    #[error("correct option index {0} is out of range")]
    CorrectOutOfRange(usize),
}

/// Single-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: usize,
}

impl Question {
    /// Builds a question from its prompt, ordered options and correct index.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, if there are
    /// not exactly four options, or if `correct` does not point at one of them.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if let Some(idx) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption(idx));
        }
        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|rest: Vec<String>| QuestionError::OptionCount(rest.len()))?;
        if correct >= OPTION_COUNT {
            return Err(QuestionError::CorrectOutOfRange(correct));
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }
}
