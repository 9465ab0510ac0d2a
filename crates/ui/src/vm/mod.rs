mod courses_vm;
mod feedback_vm;
mod lesson_vm;
mod planner_vm;
mod quiz_vm;

pub use courses_vm::{CourseOverviewVm, LessonRowVm, WeekVm, map_course_overview};
pub use feedback_vm::FeedbackVm;
pub use lesson_vm::LessonVm;
pub use planner_vm::{DAY_PX, RiskDraft, TaskDraft, bar_geometry, day_labels};
pub use quiz_vm::QuizVm;
