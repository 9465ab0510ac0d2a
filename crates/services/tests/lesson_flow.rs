use std::sync::Arc;

use academy_core::model::{LessonKey, LessonStatus};
use academy_core::time::fixed_clock;
use academy_core::Catalog;
use services::{AuthConfig, AuthService, ProgressService};
use storage::repository::InMemoryRepository;

fn key(week: u8, lesson: u8) -> LessonKey {
    LessonKey::new(week, lesson).unwrap()
}

fn build() -> (AuthService, ProgressService) {
    let repo = InMemoryRepository::new();
    let auth = AuthService::new(
        AuthConfig::default_roster(),
        fixed_clock(),
        Arc::new(repo.clone()),
    );
    let progress = ProgressService::new(
        Arc::new(Catalog::standard()),
        fixed_clock(),
        Arc::new(repo.clone()),
        Arc::new(repo),
    );
    (auth, progress)
}

#[tokio::test]
async fn full_flow_from_sign_in_to_week_two_unlock() {
    let (auth, progress) = build();

    // gate: unlisted email fails, the cohort email signs in
    assert!(auth
        .sign_in("", "stranger@example.com", "1323345tzxc")
        .await
        .is_err());
    let student = auth
        .sign_in("Aerthea Branch", "aerthea.branch@gmail.com", "1323345tzxc")
        .await
        .unwrap();
    assert_eq!(student.name(), "Aerthea Branch");

    // week 2 locked on a fresh course
    assert!(progress.start_lesson(key(2, 1)).await.is_err());

    // walk every tracked section of both week 1 lessons
    let catalog = progress.catalog();
    for lesson_key in [key(1, 1), key(1, 2)] {
        progress.start_lesson(lesson_key).await.unwrap();
        let lesson = catalog.lesson(lesson_key).unwrap();
        for section in lesson.tracked_sections() {
            progress
                .visit_section(lesson_key, section.id())
                .await
                .unwrap();
        }
        let record = progress.lesson_progress(lesson_key).await.unwrap();
        assert_eq!(record.status(), LessonStatus::Completed);
        assert_eq!(record.score(), 100);
    }

    // week 1 at 100% unlocks week 2 but not week 3
    let tracker = progress.tracker().await.unwrap();
    assert_eq!(tracker.week_percent(1), 100);
    assert!(tracker.is_week_unlocked(2));
    assert!(!tracker.is_week_unlocked(3));
    assert_eq!(tracker.overall_percent(), 33);

    progress.start_lesson(key(2, 1)).await.unwrap();

    // signing out clears the session but not the progress
    auth.sign_out().await.unwrap();
    assert_eq!(auth.current_student().await.unwrap(), None);
    let record = progress.lesson_progress(key(1, 1)).await.unwrap();
    assert!(record.is_completed());
}

#[tokio::test]
async fn perfect_quiz_reports_perfect_score() {
    let (_, progress) = build();
    let catalog = progress.catalog();
    let quiz = catalog.lesson(key(1, 1)).unwrap().quiz().unwrap();

    let answers: Vec<Option<usize>> = quiz.questions().iter().map(|q| Some(q.answer())).collect();
    let grade = quiz.grade(&answers).unwrap();
    assert!(grade.is_perfect());
    assert_eq!(grade.percent(), 100);
}
