//! Progress math over a catalog plus a snapshot of per-lesson records:
//! week and overall percentages, and the week unlock predicate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::{LessonKey, LessonProgress, Week};

/// Read-only view combining the catalog with stored lesson progress.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    catalog: Arc<Catalog>,
    progress: HashMap<LessonKey, LessonProgress>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        records: impl IntoIterator<Item = (LessonKey, LessonProgress)>,
    ) -> Self {
        Self {
            catalog,
            progress: records.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The stored record for a lesson, defaulting to not-started.
    #[must_use]
    pub fn lesson(&self, key: LessonKey) -> LessonProgress {
        self.progress.get(&key).copied().unwrap_or_default()
    }

    /// Completed and total lesson counts for one week.
    #[must_use]
    pub fn completed_in_week(&self, week: u8) -> (usize, usize) {
        let Some(week) = self.catalog.week(week) else {
            return (0, 0);
        };
        let total = week.lessons().len();
        let completed = week
            .lessons()
            .iter()
            .filter(|lesson| self.lesson(lesson.key()).is_completed())
            .count();
        (completed, total)
    }

    /// Completed lessons ÷ total lessons for a week, as a percentage.
    #[must_use]
    pub fn week_percent(&self, week: u8) -> u8 {
        let (completed, total) = self.completed_in_week(week);
        percent(completed, total)
    }

    /// Mean of the week percentages.
    #[must_use]
    pub fn overall_percent(&self) -> u8 {
        let weeks = self.catalog.weeks();
        if weeks.is_empty() {
            return 0;
        }
        let sum: u32 = weeks
            .iter()
            .map(|week| u32::from(self.week_percent(week.number())))
            .sum();
        #[allow(clippy::cast_possible_truncation)]
        let mean = (f64::from(sum) / weeks.len() as f64).round() as u8;
        mean.min(100)
    }

    /// Week 1 is always open; week N opens once week N−1 is at 100%.
    #[must_use]
    pub fn is_week_unlocked(&self, week: u8) -> bool {
        if week <= 1 {
            return true;
        }
        self.week_percent(week - 1) == 100
    }

    #[must_use]
    pub fn is_lesson_unlocked(&self, key: LessonKey) -> bool {
        self.is_week_unlocked(key.week())
    }

    /// Weeks in catalog order, for rendering the course page.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        self.catalog.weeks()
    }
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let value = ((part as f64 / total as f64) * 100.0).round() as u8;
    value.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LessonProgress;

    fn key(week: u8, lesson: u8) -> LessonKey {
        LessonKey::new(week, lesson).unwrap()
    }

    fn tracker(records: Vec<(LessonKey, LessonProgress)>) -> ProgressTracker {
        ProgressTracker::new(Arc::new(Catalog::standard()), records)
    }

    #[test]
    fn fresh_course_is_all_zero_and_week_one_open() {
        let tracker = tracker(Vec::new());
        assert_eq!(tracker.week_percent(1), 0);
        assert_eq!(tracker.overall_percent(), 0);
        assert!(tracker.is_week_unlocked(1));
        assert!(!tracker.is_week_unlocked(2));
        assert!(!tracker.is_week_unlocked(3));
    }

    #[test]
    fn week_two_stays_locked_until_week_one_is_complete() {
        let partial = tracker(vec![(key(1, 1), LessonProgress::completed(100).unwrap())]);
        assert_eq!(partial.week_percent(1), 50);
        assert!(!partial.is_week_unlocked(2));

        let full = tracker(vec![
            (key(1, 1), LessonProgress::completed(100).unwrap()),
            (key(1, 2), LessonProgress::completed(100).unwrap()),
        ]);
        assert_eq!(full.week_percent(1), 100);
        assert!(full.is_week_unlocked(2));
        // week 3 still needs week 2
        assert!(!full.is_week_unlocked(3));
    }

    #[test]
    fn in_progress_lessons_do_not_count_toward_week_percent() {
        let tracker = tracker(vec![(key(1, 1), LessonProgress::in_progress(0).unwrap())]);
        assert_eq!(tracker.week_percent(1), 0);
    }

    #[test]
    fn overall_is_the_mean_of_week_percents() {
        let tracker = tracker(vec![
            (key(1, 1), LessonProgress::completed(100).unwrap()),
            (key(1, 2), LessonProgress::completed(100).unwrap()),
            (key(2, 1), LessonProgress::completed(100).unwrap()),
        ]);
        // weeks: 100, 50, 0 -> mean 50
        assert_eq!(tracker.overall_percent(), 50);
    }

    #[test]
    fn unknown_week_reports_zero() {
        let tracker = tracker(Vec::new());
        assert_eq!(tracker.completed_in_week(9), (0, 0));
        assert_eq!(tracker.week_percent(9), 0);
    }
}
