use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonKeyError {
    #[error("week and lesson numbers are 1-based and must be non-zero")]
    ZeroComponent,

    #[error("failed to parse lesson key from {raw:?}")]
    Unparseable { raw: String },
}

/// Identifies one lesson inside the course catalog.
///
/// Renders as `week{N}_lesson{M}`, the key format the progress store uses,
/// and parses back from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonKey {
    week: u8,
    lesson: u8,
}

impl LessonKey {
    /// Creates a new `LessonKey`.
    ///
    /// # Errors
    ///
    /// Returns `LessonKeyError::ZeroComponent` if either number is zero.
    pub fn new(week: u8, lesson: u8) -> Result<Self, LessonKeyError> {
        if week == 0 || lesson == 0 {
            return Err(LessonKeyError::ZeroComponent);
        }
        Ok(Self { week, lesson })
    }

    #[must_use]
    pub fn week(&self) -> u8 {
        self.week
    }

    #[must_use]
    pub fn lesson(&self) -> u8 {
        self.lesson
    }
}

impl fmt::Debug for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonKey(w{} l{})", self.week, self.lesson)
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week{}_lesson{}", self.week, self.lesson)
    }
}

impl FromStr for LessonKey {
    type Err = LessonKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || LessonKeyError::Unparseable { raw: s.to_string() };

        let rest = s.strip_prefix("week").ok_or_else(unparseable)?;
        let (week, rest) = rest.split_once("_lesson").ok_or_else(unparseable)?;
        let week: u8 = week.parse().map_err(|_| unparseable())?;
        let lesson: u8 = rest.parse().map_err(|_| unparseable())?;
        Self::new(week, lesson).map_err(|_| unparseable())
    }
}

/// Identifier of a section within a lesson, e.g. `introduction` or `quiz`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    /// Creates a section id. Blank input yields `None`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into().trim().to_owned();
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_key_display_matches_storage_format() {
        let key = LessonKey::new(2, 1).unwrap();
        assert_eq!(key.to_string(), "week2_lesson1");
    }

    #[test]
    fn lesson_key_round_trips() {
        let original = LessonKey::new(3, 1).unwrap();
        let parsed: LessonKey = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn lesson_key_rejects_zero() {
        assert_eq!(LessonKey::new(0, 1), Err(LessonKeyError::ZeroComponent));
        assert_eq!(LessonKey::new(1, 0), Err(LessonKeyError::ZeroComponent));
    }

    #[test]
    fn lesson_key_rejects_garbage() {
        assert!("week_lesson".parse::<LessonKey>().is_err());
        assert!("week1lesson2".parse::<LessonKey>().is_err());
        assert!("week0_lesson1".parse::<LessonKey>().is_err());
    }

    #[test]
    fn section_id_trims_and_rejects_blank() {
        assert_eq!(SectionId::new(" quiz ").unwrap().as_str(), "quiz");
        assert!(SectionId::new("   ").is_none());
    }
}
