//! Submission operations for the repository.

use crate::domain::{FormSubmission, NewSubmission};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{from_millis, Repository, StoreError};

impl Repository {
    /// Insert a submission and return it with its assigned id and timestamp.
    ///
    /// The referenced form is not checked.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_submission(
        &self,
        submission: &NewSubmission,
    ) -> Result<FormSubmission, StoreError> {
        let created_at_ms = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO form_submissions (form_schema_id, data, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(submission.form_schema_id)
        .bind(submission.data.as_str())
        .bind(created_at_ms)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        Ok(FormSubmission {
            id,
            form_schema_id: submission.form_schema_id,
            data: submission.data.clone(),
            created_at: from_millis("form_submissions", id, created_at_ms),
        })
    }

    /// Query submissions for a form, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_submissions(&self, form_id: i64) -> Result<Vec<FormSubmission>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, form_schema_id, data, created_at
            FROM form_submissions
            WHERE form_schema_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(form_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(submission_from_row).collect())
    }

    /// Delete a submission permanently.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no submission has this id.
    pub async fn remove_submission(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM form_submissions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("submission {}", id)));
        }
        Ok(())
    }
}

fn submission_from_row(row: &SqliteRow) -> FormSubmission {
    let id: i64 = row.get("id");
    let created_at_ms: i64 = row.get("created_at");
    FormSubmission {
        id,
        form_schema_id: row.get("form_schema_id"),
        data: row.get("data"),
        created_at: from_millis("form_submissions", id, created_at_ms),
    }
}
