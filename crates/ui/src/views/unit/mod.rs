mod mindmap;
mod playground;
mod qa;
mod quiz;

pub use mindmap::MindmapTree;
pub use playground::Playground;
pub use qa::QaAccordion;
pub use quiz::QuizPanel;
