use thiserror::Error;

use crate::model::activity::SortingError;
use crate::model::course::CourseError;
use crate::model::ids::LessonKeyError;
use crate::model::mindmap::MindMapError;
use crate::model::planner::PlanError;
use crate::model::progress::ProgressError;
use crate::model::quiz::QuizError;
use crate::model::risk::RiskError;
use crate::model::student::StudentError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    LessonKey(#[from] LessonKeyError),
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Sorting(#[from] SortingError),
    #[error(transparent)]
    MindMap(#[from] MindMapError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Risk(#[from] RiskError),
}
