use thiserror::Error;

use crate::model::ids::UnitId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnitError {
    #[error("unit id cannot be empty")]
    EmptyId,

    #[error("unit {0} has an empty title")]
    EmptyTitle(UnitId),

    #[error("quiz question cannot be empty")]
    EmptyQuestion,

    #[error("quiz must offer at least one option")]
    NoOptions,

    #[error("correct answer index {index} is out of range for {len} options")]
    AnswerOutOfRange { index: usize, len: usize },
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Whether a unit is plain reading material or carries a code playground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitKind {
    #[default]
    Theory,
    Code,
}

impl UnitKind {
    #[must_use]
    pub fn has_playground(self) -> bool {
        matches!(self, UnitKind::Code)
    }
}

//
// ─── Q&A ───────────────────────────────────────────────────────────────────────
//

/// One interview-style question with its model answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QaPair {
    question: String,
    answer: String,
}

impl QaPair {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question attached to a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: Option<String>,
}

impl Quiz {
    /// Creates a quiz whose correct index points at one of its options.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::EmptyQuestion` for a blank question,
    /// `UnitError::NoOptions` when `options` is empty, and
    /// `UnitError::AnswerOutOfRange` when `correct_index` is not a valid option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: Option<String>,
    ) -> Result<Self, UnitError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(UnitError::EmptyQuestion);
        }
        if options.is_empty() {
            return Err(UnitError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(UnitError::AnswerOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            question,
            options,
            correct_index,
            explanation: explanation.filter(|text| !text.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── UNIT ──────────────────────────────────────────────────────────────────────
//

/// A single lesson: markdown body plus optional mind map, Q&A and quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    title: String,
    kind: UnitKind,
    content: String,
    mindmap: Option<String>,
    qa: Vec<QaPair>,
    quiz: Option<Quiz>,
}

impl Unit {
    /// Creates a unit with no mind map, Q&A or quiz.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::EmptyId` or `UnitError::EmptyTitle` when either is blank.
    pub fn new(
        id: UnitId,
        title: impl Into<String>,
        kind: UnitKind,
        content: impl Into<String>,
    ) -> Result<Self, UnitError> {
        if id.as_str().trim().is_empty() {
            return Err(UnitError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(UnitError::EmptyTitle(id));
        }

        Ok(Self {
            id,
            title,
            kind,
            content: content.into(),
            mindmap: None,
            qa: Vec::new(),
            quiz: None,
        })
    }

    /// Attach a mind-map outline. Blank outlines are dropped.
    #[must_use]
    pub fn with_mindmap(mut self, outline: impl Into<String>) -> Self {
        let outline = outline.into();
        self.mindmap = (!outline.trim().is_empty()).then_some(outline);
        self
    }

    #[must_use]
    pub fn with_qa(mut self, qa: Vec<QaPair>) -> Self {
        self.qa = qa;
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    #[must_use]
    pub fn id(&self) -> &UnitId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn mindmap(&self) -> Option<&str> {
        self.mindmap.as_deref()
    }

    #[must_use]
    pub fn qa(&self) -> &[QaPair] {
        &self.qa
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn quiz_rejects_out_of_range_answer() {
        let err = Quiz::new("Which?", options(&["A", "B"]), 2, None).unwrap_err();
        assert_eq!(err, UnitError::AnswerOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn quiz_rejects_empty_options() {
        let err = Quiz::new("Which?", Vec::new(), 0, None).unwrap_err();
        assert_eq!(err, UnitError::NoOptions);
    }

    #[test]
    fn quiz_drops_blank_explanation() {
        let quiz = Quiz::new("Which?", options(&["A"]), 0, Some("  ".into())).unwrap();
        assert_eq!(quiz.explanation(), None);
    }

    #[test]
    fn unit_requires_title() {
        let err = Unit::new(UnitId::new("u1"), " ", UnitKind::Theory, "body").unwrap_err();
        assert_eq!(err, UnitError::EmptyTitle(UnitId::new("u1")));
    }

    #[test]
    fn blank_mindmap_is_treated_as_absent() {
        let unit = Unit::new(UnitId::new("u1"), "Title", UnitKind::Code, "body")
            .unwrap()
            .with_mindmap("\n   \n");
        assert_eq!(unit.mindmap(), None);
        assert!(unit.kind().has_playground());
    }
}
