use portal_core::NavEvent;
use portal_core::quiz::QuizOutcome;

/// Everything the unit viewer and dashboard can ask of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalEvent {
    Nav(NavEvent),
    /// The explicit mark/unmark control for the current unit.
    ToggleComplete,
    /// Submit the current unit's quiz with the chosen option, if any.
    SubmitQuiz(Option<usize>),
}

impl From<NavEvent> for PortalEvent {
    fn from(event: NavEvent) -> Self {
        PortalEvent::Nav(event)
    }
}

/// Transient feedback produced while handling an event.
///
/// The UI shows these as toasts or inline quiz feedback; nothing here is
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    UnitCompleted { title: String },
    UnitUnmarked { title: String },
    QuizAnswered {
        outcome: QuizOutcome,
        explanation: Option<String>,
    },
    QuizNoSelection,
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Notice::UnitCompleted { title } => format!("Completed: {title}"),
            Notice::UnitUnmarked { title } => format!("Marked as not done: {title}"),
            Notice::QuizAnswered {
                outcome: QuizOutcome::Correct,
                ..
            } => "Correct!".to_owned(),
            Notice::QuizAnswered { .. } => "Incorrect".to_owned(),
            Notice::QuizNoSelection => "Select an answer first".to_owned(),
        }
    }
}
