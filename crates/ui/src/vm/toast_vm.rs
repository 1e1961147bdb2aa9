use portal_core::quiz::QuizOutcome;
use services::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Notices that become toasts. Answered quizzes are shown inline instead.
#[must_use]
pub fn toast_for(notice: &Notice) -> Option<(String, ToastKind)> {
    let kind = match notice {
        Notice::UnitCompleted { .. } => ToastKind::Success,
        Notice::UnitUnmarked { .. } => ToastKind::Info,
        Notice::QuizNoSelection => ToastKind::Warning,
        Notice::QuizAnswered { .. } => return None,
    };
    Some((notice.message(), kind))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub correct: bool,
    pub message: String,
    pub explanation: Option<String>,
}

#[must_use]
pub fn quiz_feedback(notice: &Notice) -> Option<QuizFeedbackVm> {
    match notice {
        Notice::QuizAnswered {
            outcome,
            explanation,
        } => Some(QuizFeedbackVm {
            correct: *outcome == QuizOutcome::Correct,
            message: notice.message(),
            explanation: explanation.clone(),
        }),
        _ => None,
    }
}
