//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::{ProgressError, QuizError, StudentError};
use academy_core::model::{LessonKey, SectionId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("email is not on the student roster")]
    NotAuthorized,

    #[error("password does not match")]
    WrongPassword,

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error(transparent)]
    Student(#[from] StudentError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("unknown lesson {0}")]
    UnknownLesson(LessonKey),

    #[error("lesson {key} has no section {section}")]
    UnknownSection { key: LessonKey, section: SectionId },

    #[error("lesson {0} is locked until the previous week is complete")]
    LessonLocked(LessonKey),

    #[error("lesson {0} does not carry a quiz")]
    NoQuiz(LessonKey),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AnalysisService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("resume analysis is not configured")]
    Disabled,

    #[error("resume text is too short to analyze")]
    TextTooShort,

    #[error("the analyzer could not read the resume")]
    Unreadable,

    #[error("analysis request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
