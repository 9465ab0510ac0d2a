use chrono::{DateTime, Utc};
use sqlx::Row;

use academy_core::model::{LessonKey, LessonProgress};

use super::SqliteRepository;
use super::mapping::{lesson_key_from_row, progress_from_row, ser};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn upsert_progress(
        &self,
        key: LessonKey,
        progress: &LessonProgress,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO lesson_progress (week, lesson, status, score, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(week, lesson) DO UPDATE SET
                status = excluded.status,
                score = excluded.score,
                updated_at = excluded.updated_at
            ",
        )
        .bind(i64::from(key.week()))
        .bind(i64::from(key.lesson()))
        .bind(progress.status().label())
        .bind(i64::from(progress.score()))
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn get_progress(&self, key: LessonKey) -> Result<Option<LessonProgress>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT status, score FROM lesson_progress
            WHERE week = ?1 AND lesson = ?2
            ",
        )
        .bind(i64::from(key.week()))
        .bind(i64::from(key.lesson()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => {
                let status: String = row.try_get("status").map_err(ser)?;
                let score: i64 = row.try_get("score").map_err(ser)?;
                progress_from_row(&status, score).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list_progress(&self) -> Result<Vec<(LessonKey, LessonProgress)>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT week, lesson, status, score FROM lesson_progress
            ORDER BY week ASC, lesson ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let week: i64 = row.try_get("week").map_err(ser)?;
            let lesson: i64 = row.try_get("lesson").map_err(ser)?;
            let status: String = row.try_get("status").map_err(ser)?;
            let score: i64 = row.try_get("score").map_err(ser)?;
            records.push((
                lesson_key_from_row(week, lesson)?,
                progress_from_row(&status, score)?,
            ));
        }
        Ok(records)
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM lesson_progress")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
