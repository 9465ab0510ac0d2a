//! Row-to-domain conversion helpers shared by the repo impls.

use academy_core::model::{LessonKey, LessonProgress, LessonStatus};

use crate::repository::StorageError;

pub(super) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(super) fn lesson_key_from_row(week: i64, lesson: i64) -> Result<LessonKey, StorageError> {
    let week = u8::try_from(week).map_err(|_| ser("week out of range"))?;
    let lesson = u8::try_from(lesson).map_err(|_| ser("lesson out of range"))?;
    LessonKey::new(week, lesson).map_err(ser)
}

pub(super) fn progress_from_row(status: &str, score: i64) -> Result<LessonProgress, StorageError> {
    let status: LessonStatus = status.parse().map_err(ser)?;
    let score = u16::try_from(score).map_err(|_| ser("score out of range"))?;
    LessonProgress::from_persisted(status, score).map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_valid_rows() {
        let key = lesson_key_from_row(2, 1).unwrap();
        assert_eq!(key.to_string(), "week2_lesson1");

        let progress = progress_from_row("Completed", 100).unwrap();
        assert!(progress.is_completed());
    }

    #[test]
    fn rejects_corrupt_rows() {
        assert!(lesson_key_from_row(0, 1).is_err());
        assert!(lesson_key_from_row(300, 1).is_err());
        assert!(progress_from_row("Done", 10).is_err());
        assert!(progress_from_row("Completed", 150).is_err());
    }
}
