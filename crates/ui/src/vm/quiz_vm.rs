use academy_core::{QuestionSet, QuizError, QuizScore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[must_use]
pub fn map_questions(set: &QuestionSet) -> Vec<QuestionVm> {
    set.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionVm {
            index,
            prompt: format!("{}. {}", index + 1, question.prompt()),
            options: question.options().to_vec(),
        })
        .collect()
}

#[must_use]
pub fn quiz_result_message(result: &Result<QuizScore, QuizError>) -> String {
    match result {
        Ok(score) => format!("Your score: {score}"),
        Err(QuizError::Unanswered(index)) => {
            format!("Please answer question {} before submitting.", index + 1)
        }
        Err(_) => "Please answer every question before submitting.".to_owned(),
    }
}
