use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{LessonKey, SectionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("score {score} is out of the 0..=100 range")]
    ScoreOutOfRange { score: u16 },

    #[error("unknown lesson status {raw:?}")]
    UnknownStatus { raw: String },
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a lesson for one student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl LessonStatus {
    /// Display label, matching the status chips on the course page.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LessonStatus::NotStarted => "Not Started",
            LessonStatus::InProgress => "In Progress",
            LessonStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LessonStatus {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(LessonStatus::NotStarted),
            "In Progress" => Ok(LessonStatus::InProgress),
            "Completed" => Ok(LessonStatus::Completed),
            other => Err(ProgressError::UnknownStatus {
                raw: other.to_string(),
            }),
        }
    }
}

//
// ─── LESSON PROGRESS ───────────────────────────────────────────────────────────
//

/// One progress record per lesson: status plus a 0..=100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    status: LessonStatus,
    score: u8,
}

impl LessonProgress {
    #[must_use]
    pub fn not_started() -> Self {
        Self::default()
    }

    /// An in-progress record with the given score.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` above 100.
    pub fn in_progress(score: u8) -> Result<Self, ProgressError> {
        Self::from_persisted(LessonStatus::InProgress, u16::from(score))
    }

    /// A completed record with the given score.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` above 100.
    pub fn completed(score: u8) -> Result<Self, ProgressError> {
        Self::from_persisted(LessonStatus::Completed, u16::from(score))
    }

    /// Rehydrate a record from storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` if the score exceeds 100.
    pub fn from_persisted(status: LessonStatus, score: u16) -> Result<Self, ProgressError> {
        if score > 100 {
            return Err(ProgressError::ScoreOutOfRange { score });
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self {
            status,
            score: score as u8,
        })
    }

    #[must_use]
    pub fn status(&self) -> LessonStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == LessonStatus::Completed
    }
}

//
// ─── SECTION LOG ───────────────────────────────────────────────────────────────
//

/// The set of sections a student has visited within one lesson.
///
/// The lesson's final capstone section (quiz or takeaway) is excluded from
/// percentage math by the caller passing `tracked_total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLog {
    key: LessonKey,
    visited: Vec<SectionId>,
}

impl SectionLog {
    #[must_use]
    pub fn new(key: LessonKey, visited: Vec<SectionId>) -> Self {
        let mut log = Self {
            key,
            visited: Vec::new(),
        };
        for section in visited {
            log.record(section);
        }
        log
    }

    #[must_use]
    pub fn key(&self) -> LessonKey {
        self.key
    }

    #[must_use]
    pub fn visited(&self) -> &[SectionId] {
        &self.visited
    }

    #[must_use]
    pub fn contains(&self, section: &SectionId) -> bool {
        self.visited.contains(section)
    }

    /// Records a visit. Revisits are idempotent.
    pub fn record(&mut self, section: SectionId) {
        if !self.visited.contains(&section) {
            self.visited.push(section);
        }
    }

    /// Percentage of tracked sections visited, rounded, saturating at 100.
    #[must_use]
    pub fn percent(&self, tracked_total: usize) -> u8 {
        if tracked_total == 0 {
            return 0;
        }
        let visited = self.visited.len().min(tracked_total);
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let percent = ((visited as f64 / tracked_total as f64) * 100.0).round() as u8;
        percent.min(100)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> LessonKey {
        LessonKey::new(1, 1).unwrap()
    }

    fn section(id: &str) -> SectionId {
        SectionId::new(id).unwrap()
    }

    #[test]
    fn rejects_score_above_hundred() {
        let err = LessonProgress::from_persisted(LessonStatus::Completed, 120).unwrap_err();
        assert_eq!(err, ProgressError::ScoreOutOfRange { score: 120 });
    }

    #[test]
    fn status_round_trips_through_label() {
        for status in [
            LessonStatus::NotStarted,
            LessonStatus::InProgress,
            LessonStatus::Completed,
        ] {
            let parsed: LessonStatus = status.label().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("Done".parse::<LessonStatus>().is_err());
    }

    #[test]
    fn section_log_dedupes_revisits() {
        let mut log = SectionLog::new(key(), Vec::new());
        log.record(section("introduction"));
        log.record(section("introduction"));
        assert_eq!(log.visited().len(), 1);
    }

    #[test]
    fn percent_excludes_capstone_via_tracked_total() {
        // 10-section lesson, quiz untracked: 9 tracked sections.
        let mut log = SectionLog::new(key(), Vec::new());
        for id in ["a", "b", "c"] {
            log.record(section(id));
        }
        assert_eq!(log.percent(9), 33);
        for id in ["d", "e", "f", "g", "h", "i"] {
            log.record(section(id));
        }
        assert_eq!(log.percent(9), 100);
    }

    #[test]
    fn percent_handles_zero_tracked() {
        let log = SectionLog::new(key(), Vec::new());
        assert_eq!(log.percent(0), 0);
    }
}
