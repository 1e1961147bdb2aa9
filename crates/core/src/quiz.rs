use crate::model::Quiz;

/// Result of submitting a quiz answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuizOutcome {
    Correct,
    Incorrect,
    /// Submitted without choosing an option. Not a wrong answer.
    NoSelection,
}

impl QuizOutcome {
    #[must_use]
    pub fn evaluate(selected: Option<usize>, correct_index: usize) -> Self {
        match selected {
            None => QuizOutcome::NoSelection,
            Some(index) if index == correct_index => QuizOutcome::Correct,
            Some(_) => QuizOutcome::Incorrect,
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, QuizOutcome::NoSelection)
    }
}

impl Quiz {
    #[must_use]
    pub fn evaluate(&self, selected: Option<usize>) -> QuizOutcome {
        QuizOutcome::evaluate(selected, self.correct_index())
    }
}
