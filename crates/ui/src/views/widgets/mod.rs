mod gantt;
mod mindmap;
mod quiz;
mod risk;
mod sorting;

pub use gantt::GanttWidget;
pub use mindmap::MindMapWidget;
pub use quiz::QuizWidget;
pub use risk::{RiskMatrixWidget, RiskRegisterWidget};
pub use sorting::SortingWidget;
