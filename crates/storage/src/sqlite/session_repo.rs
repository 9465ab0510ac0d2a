use chrono::{DateTime, Utc};
use sqlx::Row;

use academy_core::model::Student;

use super::SqliteRepository;
use super::mapping::ser;
use crate::repository::{SessionRepository, StorageError};

#[async_trait::async_trait]
impl SessionRepository for SqliteRepository {
    async fn store_student(
        &self,
        student: &Student,
        signed_in_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO session_user (id, email, name, signed_in_at)
            VALUES (1, ?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                email = excluded.email,
                name = excluded.name,
                signed_in_at = excluded.signed_in_at
            ",
        )
        .bind(student.email())
        .bind(student.name())
        .bind(signed_in_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn current_student(&self) -> Result<Option<Student>, StorageError> {
        let row = sqlx::query("SELECT email, name FROM session_user WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => {
                let email: String = row.try_get("email").map_err(ser)?;
                let name: String = row.try_get("name").map_err(ser)?;
                Student::new(email, Some(name)).map(Some).map_err(ser)
            }
            None => Ok(None),
        }
    }

    async fn clear_student(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session_user WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
