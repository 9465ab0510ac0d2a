use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use academy_core::model::{LessonKey, LessonProgress, SectionId, Student};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The single signed-in student record.
///
/// This is the desktop stand-in for the browser's `tsa_user` blob: at most
/// one row, created on sign-in and deleted on sign-out.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist the signed-in student, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn store_student(
        &self,
        student: &Student,
        signed_in_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Fetch the signed-in student, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn current_student(&self) -> Result<Option<Student>, StorageError>;

    /// Remove the record. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn clear_student(&self) -> Result<(), StorageError>;
}

/// Per-lesson progress records keyed by `LessonKey`.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert or update the record for one lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert_progress(
        &self,
        key: LessonKey,
        progress: &LessonProgress,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Fetch the record for one lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn get_progress(&self, key: LessonKey) -> Result<Option<LessonProgress>, StorageError>;

    /// All stored records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn list_progress(&self) -> Result<Vec<(LessonKey, LessonProgress)>, StorageError>;

    /// Delete every record (fresh-start seed).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn clear_progress(&self) -> Result<(), StorageError>;
}

/// Visited-section sets per lesson.
#[async_trait]
pub trait SectionLogRepository: Send + Sync {
    /// Record a section visit. Revisits are idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the visit cannot be stored.
    async fn record_visit(
        &self,
        key: LessonKey,
        section: &SectionId,
        visited_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// The visited sections for one lesson, in first-visit order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn visited_sections(&self, key: LessonKey) -> Result<Vec<SectionId>, StorageError>;

    /// Delete every visit (fresh-start seed).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failure.
    async fn clear_visits(&self) -> Result<(), StorageError>;
}

/// Simple in-memory implementation for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    student: Arc<Mutex<Option<Student>>>,
    progress: Arc<Mutex<HashMap<LessonKey, LessonProgress>>>,
    visits: Arc<Mutex<Vec<(LessonKey, SectionId)>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn store_student(
        &self,
        student: &Student,
        _signed_in_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        *lock(&self.student)? = Some(student.clone());
        Ok(())
    }

    async fn current_student(&self) -> Result<Option<Student>, StorageError> {
        Ok(lock(&self.student)?.clone())
    }

    async fn clear_student(&self) -> Result<(), StorageError> {
        *lock(&self.student)? = None;
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn upsert_progress(
        &self,
        key: LessonKey,
        progress: &LessonProgress,
        _updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        lock(&self.progress)?.insert(key, *progress);
        Ok(())
    }

    async fn get_progress(&self, key: LessonKey) -> Result<Option<LessonProgress>, StorageError> {
        Ok(lock(&self.progress)?.get(&key).copied())
    }

    async fn list_progress(&self) -> Result<Vec<(LessonKey, LessonProgress)>, StorageError> {
        let mut records: Vec<_> = lock(&self.progress)?
            .iter()
            .map(|(key, progress)| (*key, *progress))
            .collect();
        records.sort_by_key(|(key, _)| *key);
        Ok(records)
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        lock(&self.progress)?.clear();
        Ok(())
    }
}

#[async_trait]
impl SectionLogRepository for InMemoryRepository {
    async fn record_visit(
        &self,
        key: LessonKey,
        section: &SectionId,
        _visited_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut visits = lock(&self.visits)?;
        if !visits.iter().any(|(k, s)| *k == key && s == section) {
            visits.push((key, section.clone()));
        }
        Ok(())
    }

    async fn visited_sections(&self, key: LessonKey) -> Result<Vec<SectionId>, StorageError> {
        let visits = lock(&self.visits)?;
        let mut seen = HashSet::new();
        Ok(visits
            .iter()
            .filter(|(k, _)| *k == key)
            .filter(|(_, s)| seen.insert(s.clone()))
            .map(|(_, s)| s.clone())
            .collect())
    }

    async fn clear_visits(&self) -> Result<(), StorageError> {
        lock(&self.visits)?.clear();
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub sections: Arc<dyn SectionLogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let sections: Arc<dyn SectionLogRepository> = Arc::new(repo);
        Self {
            sessions,
            progress,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::time::fixed_now;

    fn key(week: u8, lesson: u8) -> LessonKey {
        LessonKey::new(week, lesson).unwrap()
    }

    #[tokio::test]
    async fn student_record_replaces_and_clears() {
        let repo = InMemoryRepository::new();
        let ada = Student::new("ada@example.com", None).unwrap();
        repo.store_student(&ada, fixed_now()).await.unwrap();

        let grace = Student::new("grace@example.com", None).unwrap();
        repo.store_student(&grace, fixed_now()).await.unwrap();
        assert_eq!(repo.current_student().await.unwrap(), Some(grace));

        repo.clear_student().await.unwrap();
        assert_eq!(repo.current_student().await.unwrap(), None);
        // clearing again is fine
        repo.clear_student().await.unwrap();
    }

    #[tokio::test]
    async fn progress_round_trips_and_lists_sorted() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();
        repo.upsert_progress(key(2, 1), &LessonProgress::in_progress(0).unwrap(), now)
            .await
            .unwrap();
        repo.upsert_progress(key(1, 1), &LessonProgress::completed(100).unwrap(), now)
            .await
            .unwrap();

        let records = repo.list_progress().await.unwrap();
        assert_eq!(records[0].0, key(1, 1));
        assert_eq!(records[1].0, key(2, 1));
        assert!(records[0].1.is_completed());
    }

    #[tokio::test]
    async fn visits_are_idempotent_and_scoped_to_lesson() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();
        let intro = SectionId::new("introduction").unwrap();

        repo.record_visit(key(1, 1), &intro, now).await.unwrap();
        repo.record_visit(key(1, 1), &intro, now).await.unwrap();
        repo.record_visit(key(1, 2), &intro, now).await.unwrap();

        assert_eq!(repo.visited_sections(key(1, 1)).await.unwrap().len(), 1);
        assert_eq!(repo.visited_sections(key(1, 2)).await.unwrap().len(), 1);

        repo.clear_visits().await.unwrap();
        assert!(repo.visited_sections(key(1, 1)).await.unwrap().is_empty());
    }
}
