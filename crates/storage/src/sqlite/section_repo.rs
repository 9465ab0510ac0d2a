use chrono::{DateTime, Utc};
use sqlx::Row;

use academy_core::model::{LessonKey, SectionId};

use super::SqliteRepository;
use super::mapping::ser;
use crate::repository::{SectionLogRepository, StorageError};

#[async_trait::async_trait]
impl SectionLogRepository for SqliteRepository {
    async fn record_visit(
        &self,
        key: LessonKey,
        section: &SectionId,
        visited_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        // First visit wins; revisits keep the original timestamp.
        sqlx::query(
            r"
            INSERT INTO section_visits (week, lesson, section_id, visited_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(week, lesson, section_id) DO NOTHING
            ",
        )
        .bind(i64::from(key.week()))
        .bind(i64::from(key.lesson()))
        .bind(section.as_str())
        .bind(visited_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn visited_sections(&self, key: LessonKey) -> Result<Vec<SectionId>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT section_id FROM section_visits
            WHERE week = ?1 AND lesson = ?2
            ORDER BY visited_at ASC, section_id ASC
            ",
        )
        .bind(i64::from(key.week()))
        .bind(i64::from(key.lesson()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut sections = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("section_id").map_err(ser)?;
            let id = SectionId::new(id).ok_or_else(|| ser("blank section id"))?;
            sections.push(id);
        }
        Ok(sections)
    }

    async fn clear_visits(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM section_visits")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
