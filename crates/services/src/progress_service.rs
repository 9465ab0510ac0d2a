use std::sync::Arc;

use tracing::{debug, info};

use academy_core::model::{
    CompletionRule, Lesson, LessonKey, LessonProgress, QuizGrade, SectionId, SectionLog,
};
use academy_core::{Catalog, Clock, ProgressTracker};
use storage::repository::{ProgressRepository, SectionLogRepository};

use crate::error::ProgressServiceError;

/// Owns every write to the lesson-progress store.
///
/// Views never mutate progress directly; they report events (lesson opened,
/// section visited, quiz submitted) and this service derives the record.
#[derive(Clone)]
pub struct ProgressService {
    catalog: Arc<Catalog>,
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
    sections: Arc<dyn SectionLogRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        clock: Clock,
        progress: Arc<dyn ProgressRepository>,
        sections: Arc<dyn SectionLogRepository>,
    ) -> Self {
        Self {
            catalog,
            clock,
            progress,
            sections,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn lesson(&self, key: LessonKey) -> Result<&Lesson, ProgressServiceError> {
        self.catalog
            .lesson(key)
            .ok_or(ProgressServiceError::UnknownLesson(key))
    }

    /// A tracker over the current progress snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failure.
    pub async fn tracker(&self) -> Result<ProgressTracker, ProgressServiceError> {
        let records = self.progress.list_progress().await?;
        Ok(ProgressTracker::new(Arc::clone(&self.catalog), records))
    }

    /// The stored record for one lesson, defaulting to not-started.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` for an unknown lesson or storage
    /// failure.
    pub async fn lesson_progress(
        &self,
        key: LessonKey,
    ) -> Result<LessonProgress, ProgressServiceError> {
        self.lesson(key)?;
        Ok(self.progress.get_progress(key).await?.unwrap_or_default())
    }

    /// Marks a lesson opened: `NotStarted` becomes `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::LessonLocked` when the lesson's week
    /// is still gated, plus unknown-lesson and storage errors.
    pub async fn start_lesson(
        &self,
        key: LessonKey,
    ) -> Result<LessonProgress, ProgressServiceError> {
        self.lesson(key)?;
        let tracker = self.tracker().await?;
        if !tracker.is_lesson_unlocked(key) {
            return Err(ProgressServiceError::LessonLocked(key));
        }

        let current = tracker.lesson(key);
        if current.status() != academy_core::model::LessonStatus::NotStarted {
            return Ok(current);
        }
        let started = LessonProgress::in_progress(0)?;
        self.progress
            .upsert_progress(key, &started, self.clock.now())
            .await?;
        debug!(%key, "lesson started");
        Ok(started)
    }

    /// Records a section visit and re-derives the lesson record.
    ///
    /// For sections-completed lessons, visiting the last tracked section
    /// yields `Completed` with score 100. Capstone visits only ensure the
    /// lesson is at least `InProgress`. Completion is never downgraded.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` for unknown lessons/sections and
    /// storage failures.
    pub async fn visit_section(
        &self,
        key: LessonKey,
        section: &SectionId,
    ) -> Result<LessonProgress, ProgressServiceError> {
        let lesson = self.lesson(key)?;
        if lesson.section(section).is_none() {
            return Err(ProgressServiceError::UnknownSection {
                key,
                section: section.clone(),
            });
        }

        if lesson.is_tracked(section) {
            self.sections
                .record_visit(key, section, self.clock.now())
                .await?;
        }

        let current = self.progress.get_progress(key).await?.unwrap_or_default();
        if current.is_completed() {
            return Ok(current);
        }

        let log = self.section_log(key).await?;
        let tracked_visited = lesson
            .tracked_sections()
            .iter()
            .filter(|s| log.contains(s.id()))
            .count();

        let next = match lesson.completion() {
            CompletionRule::SectionsVisited if tracked_visited == lesson.tracked_count() => {
                info!(%key, "lesson completed");
                LessonProgress::completed(100)?
            }
            _ => LessonProgress::in_progress(current.score())?,
        };
        self.progress
            .upsert_progress(key, &next, self.clock.now())
            .await?;
        Ok(next)
    }

    /// Applies a graded quiz submission to the lesson record.
    ///
    /// Quiz-gated lessons complete at or above their pass bar and otherwise
    /// hold the score as in-progress. For sections-completed lessons the
    /// quiz is informational and the stored record is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::NoQuiz` when the lesson has no quiz,
    /// plus unknown-lesson and storage errors.
    pub async fn record_quiz(
        &self,
        key: LessonKey,
        grade: QuizGrade,
    ) -> Result<LessonProgress, ProgressServiceError> {
        let lesson = self.lesson(key)?;
        if lesson.quiz().is_none() {
            return Err(ProgressServiceError::NoQuiz(key));
        }

        let current = self.progress.get_progress(key).await?.unwrap_or_default();
        let next = match lesson.completion() {
            CompletionRule::QuizPass { pass_percent } => {
                let percent = grade.percent();
                if percent >= pass_percent {
                    info!(%key, score = percent, "lesson completed by quiz");
                    LessonProgress::completed(percent)?
                } else if current.is_completed() {
                    current
                } else {
                    LessonProgress::in_progress(percent)?
                }
            }
            CompletionRule::SectionsVisited => return Ok(current),
        };
        self.progress
            .upsert_progress(key, &next, self.clock.now())
            .await?;
        Ok(next)
    }

    /// The visited-section log for one lesson.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` for unknown lessons or storage
    /// failure.
    pub async fn section_log(&self, key: LessonKey) -> Result<SectionLog, ProgressServiceError> {
        self.lesson(key)?;
        let visited = self.sections.visited_sections(key).await?;
        Ok(SectionLog::new(key, visited))
    }

    /// Visited ÷ tracked sections for one lesson, as a percentage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` for unknown lessons or storage
    /// failure.
    pub async fn section_percent(&self, key: LessonKey) -> Result<u8, ProgressServiceError> {
        let lesson = self.lesson(key)?;
        let log = self.section_log(key).await?;
        Ok(log.percent(lesson.tracked_count()))
    }

    /// Wipes progress and section logs (fresh-start seed).
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failure.
    pub async fn reset_all(&self) -> Result<(), ProgressServiceError> {
        self.progress.clear_progress().await?;
        self.sections.clear_visits().await?;
        info!("progress reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::LessonStatus;
    use academy_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service() -> ProgressService {
        let repo = InMemoryRepository::new();
        ProgressService::new(
            Arc::new(Catalog::standard()),
            fixed_clock(),
            Arc::new(repo.clone()),
            Arc::new(repo),
        )
    }

    fn key(week: u8, lesson: u8) -> LessonKey {
        LessonKey::new(week, lesson).unwrap()
    }

    fn sid(id: &str) -> SectionId {
        SectionId::new(id).unwrap()
    }

    async fn complete_lesson(service: &ProgressService, key: LessonKey) {
        let catalog = service.catalog();
        let lesson = catalog.lesson(key).unwrap();
        let sections: Vec<_> = lesson
            .tracked_sections()
            .iter()
            .map(|s| s.id().clone())
            .collect();
        for section in &sections {
            service.visit_section(key, section).await.unwrap();
        }
    }

    #[tokio::test]
    async fn visiting_all_tracked_sections_completes_with_score_100() {
        let service = service();
        complete_lesson(&service, key(1, 1)).await;

        let progress = service.lesson_progress(key(1, 1)).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::Completed);
        assert_eq!(progress.score(), 100);
        assert_eq!(service.section_percent(key(1, 1)).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn partial_visits_leave_lesson_in_progress() {
        let service = service();
        service
            .visit_section(key(1, 1), &sid("introduction"))
            .await
            .unwrap();

        let progress = service.lesson_progress(key(1, 1)).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::InProgress);
        assert_eq!(progress.score(), 0);
        // 1 of 9 tracked sections
        assert_eq!(service.section_percent(key(1, 1)).await.unwrap(), 11);
    }

    #[tokio::test]
    async fn locked_lesson_cannot_start() {
        let service = service();
        let err = service.start_lesson(key(2, 1)).await.unwrap_err();
        assert!(matches!(err, ProgressServiceError::LessonLocked(_)));

        complete_lesson(&service, key(1, 1)).await;
        complete_lesson(&service, key(1, 2)).await;

        let progress = service.start_lesson(key(2, 1)).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::InProgress);
    }

    #[tokio::test]
    async fn week_unlocks_at_exactly_one_hundred_percent() {
        let service = service();
        complete_lesson(&service, key(1, 1)).await;

        let tracker = service.tracker().await.unwrap();
        assert_eq!(tracker.week_percent(1), 50);
        assert!(!tracker.is_week_unlocked(2));

        complete_lesson(&service, key(1, 2)).await;
        let tracker = service.tracker().await.unwrap();
        assert_eq!(tracker.week_percent(1), 100);
        assert!(tracker.is_week_unlocked(2));
    }

    #[tokio::test]
    async fn quiz_gated_lesson_completes_at_the_pass_bar() {
        let service = service();
        let catalog = service.catalog();
        let quiz = catalog.lesson(key(3, 1)).unwrap().quiz().unwrap();

        // 4 of 5 correct: 80%, at the bar
        let mut answers: Vec<Option<usize>> = quiz
            .questions()
            .iter()
            .map(|q| Some(q.answer()))
            .collect();
        answers[4] = Some((quiz.questions()[4].answer() + 1) % 4);
        let grade = quiz.grade(&answers).unwrap();

        let progress = service.record_quiz(key(3, 1), grade).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::Completed);
        assert_eq!(progress.score(), 80);
    }

    #[tokio::test]
    async fn failing_quiz_holds_score_in_progress_without_downgrading() {
        let service = service();
        let catalog = service.catalog();
        let quiz = catalog.lesson(key(3, 1)).unwrap().quiz().unwrap();

        let mut answers: Vec<Option<usize>> = quiz
            .questions()
            .iter()
            .map(|q| Some(q.answer()))
            .collect();
        for slot in answers.iter_mut().take(3) {
            *slot = slot.map(|a| (a + 1) % 4);
        }
        let failing = quiz.grade(&answers).unwrap();

        let progress = service.record_quiz(key(3, 1), failing).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::InProgress);
        assert_eq!(progress.score(), 40);

        // pass, then fail again: completion sticks
        let perfect = quiz
            .grade(
                &quiz
                    .questions()
                    .iter()
                    .map(|q| Some(q.answer()))
                    .collect::<Vec<_>>(),
            )
            .unwrap();
        service.record_quiz(key(3, 1), perfect).await.unwrap();
        let after = service.record_quiz(key(3, 1), failing).await.unwrap();
        assert!(after.is_completed());
    }

    #[tokio::test]
    async fn quiz_on_sections_lesson_is_informational() {
        let service = service();
        let catalog = service.catalog();
        let quiz = catalog.lesson(key(1, 1)).unwrap().quiz().unwrap();
        let perfect = quiz
            .grade(
                &quiz
                    .questions()
                    .iter()
                    .map(|q| Some(q.answer()))
                    .collect::<Vec<_>>(),
            )
            .unwrap();

        let progress = service.record_quiz(key(1, 1), perfect).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::NotStarted);
    }

    #[tokio::test]
    async fn unknown_lesson_and_section_are_rejected() {
        let service = service();
        assert!(matches!(
            service.lesson_progress(key(9, 1)).await.unwrap_err(),
            ProgressServiceError::UnknownLesson(_)
        ));
        assert!(matches!(
            service
                .visit_section(key(1, 1), &sid("missing"))
                .await
                .unwrap_err(),
            ProgressServiceError::UnknownSection { .. }
        ));
    }

    #[tokio::test]
    async fn reset_clears_progress_and_visits() {
        let service = service();
        complete_lesson(&service, key(1, 1)).await;
        service.reset_all().await.unwrap();

        let progress = service.lesson_progress(key(1, 1)).await.unwrap();
        assert_eq!(progress.status(), LessonStatus::NotStarted);
        assert_eq!(service.section_percent(key(1, 1)).await.unwrap(), 0);
    }
}
