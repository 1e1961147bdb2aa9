#![forbid(unsafe_code)]

pub mod curriculum;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod quiz;

pub use curriculum::{Curriculum, CurriculumError};
pub use navigation::{Cursor, NavEffect, NavEvent, NavState, NotFound, Tab, Transition};
pub use progress::{CompletedUnits, completion_percentage};
pub use quiz::QuizOutcome;
