pub mod activity;
pub mod course;
pub mod ids;
pub mod mindmap;
pub mod planner;
pub mod progress;
pub mod quiz;
pub mod risk;
pub mod student;

pub use activity::{SortingActivity, SortingBucket, SortingError, SortingItem, SortingOutcome};
pub use course::{
    ChecklistStep, CompletionRule, CourseError, InfoCard, Lesson, Quote, ResponseField,
    ScenarioChoice, Section, SectionBody, Story, Week,
};
pub use ids::{LessonKey, LessonKeyError, SectionId};
pub use mindmap::{MindMap, MindMapError, MindMapNode};
pub use planner::{GanttPlan, PlanError, PlanTask};
pub use progress::{LessonProgress, LessonStatus, ProgressError, SectionLog};
pub use quiz::{Quiz, QuizError, QuizGrade, QuizQuestion};
pub use risk::{
    matrix_cell, RiskEntry, RiskError, RiskLevel, RiskRegister, RiskStatus, RISK_CATEGORIES,
};
pub use student::{Student, StudentError};
