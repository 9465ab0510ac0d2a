use academy_core::ProgressTracker;
use academy_core::model::{LessonKey, LessonStatus};

/// Everything the courses page renders, precomputed off the tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseOverviewVm {
    pub overall_percent: u8,
    pub weeks: Vec<WeekVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeekVm {
    pub number: u8,
    pub title: String,
    pub percent: u8,
    pub done_label: String,
    pub left_label: String,
    pub lessons: Vec<LessonRowVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonRowVm {
    pub key: LessonKey,
    pub number: u8,
    pub title: String,
    pub description: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub accessible: bool,
}

fn status_class(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "chip chip-completed",
        LessonStatus::InProgress => "chip chip-progress",
        LessonStatus::NotStarted => "chip chip-new",
    }
}

#[must_use]
pub fn map_course_overview(tracker: &ProgressTracker) -> CourseOverviewVm {
    let weeks = tracker
        .weeks()
        .iter()
        .map(|week| {
            let number = week.number();
            let (completed, total) = tracker.completed_in_week(number);
            let accessible = tracker.is_week_unlocked(number);
            let lessons = week
                .lessons()
                .iter()
                .map(|lesson| {
                    let status = tracker.lesson(lesson.key()).status();
                    LessonRowVm {
                        key: lesson.key(),
                        number: lesson.key().lesson(),
                        title: lesson.title().to_owned(),
                        description: lesson.description().to_owned(),
                        status_label: status.label(),
                        status_class: status_class(status),
                        accessible,
                    }
                })
                .collect();
            WeekVm {
                number,
                title: week.title().to_owned(),
                percent: tracker.week_percent(number),
                done_label: format!("{completed}/{total} done"),
                left_label: format!("{} left", total - completed),
                lessons,
            }
        })
        .collect();

    CourseOverviewVm {
        overall_percent: tracker.overall_percent(),
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::Catalog;
    use academy_core::model::LessonProgress;
    use std::sync::Arc;

    fn key(week: u8, lesson: u8) -> LessonKey {
        LessonKey::new(week, lesson).unwrap()
    }

    #[test]
    fn fresh_course_locks_later_weeks() {
        let tracker = ProgressTracker::new(Arc::new(Catalog::standard()), Vec::new());
        let vm = map_course_overview(&tracker);

        assert_eq!(vm.overall_percent, 0);
        assert_eq!(vm.weeks.len(), 3);
        assert!(vm.weeks[0].lessons.iter().all(|l| l.accessible));
        assert!(vm.weeks[1].lessons.iter().all(|l| !l.accessible));
        assert_eq!(vm.weeks[0].done_label, "0/2 done");
        assert_eq!(vm.weeks[0].lessons[0].status_label, "Not Started");
    }

    #[test]
    fn completed_week_unlocks_the_next() {
        let tracker = ProgressTracker::new(
            Arc::new(Catalog::standard()),
            vec![
                (key(1, 1), LessonProgress::completed(100).unwrap()),
                (key(1, 2), LessonProgress::completed(100).unwrap()),
            ],
        );
        let vm = map_course_overview(&tracker);

        assert_eq!(vm.weeks[0].percent, 100);
        assert_eq!(vm.weeks[0].left_label, "0 left");
        assert!(vm.weeks[1].lessons.iter().all(|l| l.accessible));
        assert!(vm.weeks[2].lessons.iter().all(|l| !l.accessible));
        assert_eq!(vm.weeks[0].lessons[0].status_class, "chip chip-completed");
    }
}
