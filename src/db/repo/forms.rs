//! Form definition operations for the repository.

use crate::domain::{Form, NewForm};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{from_millis, Repository, StoreError};

impl Repository {
    /// Insert a form and return it with its assigned id and timestamp.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_form(&self, form: &NewForm) -> Result<Form, StoreError> {
        let created_at_ms = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO forms (name, elements, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(form.name.as_str())
        .bind(form.elements.as_str())
        .bind(created_at_ms)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        Ok(Form {
            id,
            name: form.name.clone(),
            elements: form.elements.clone(),
            created_at: from_millis("forms", id, created_at_ms),
        })
    }

    /// Query all live forms, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_forms(&self) -> Result<Vec<Form>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, elements, created_at
            FROM forms
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(form_from_row).collect())
    }

    /// Query a single live form by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no live form has this id.
    pub async fn query_form(&self, id: i64) -> Result<Form, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, elements, created_at
            FROM forms
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(form_from_row)
            .ok_or_else(|| StoreError::NotFound(format!("form {}", id)))
    }

    /// Mark a form deleted so later reads skip it.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no live form has this id.
    pub async fn soft_delete_form(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE forms SET deleted_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(Utc::now().timestamp_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("form {}", id)));
        }
        Ok(())
    }
}

fn form_from_row(row: &SqliteRow) -> Form {
    let id: i64 = row.get("id");
    let created_at_ms: i64 = row.get("created_at");
    Form {
        id,
        name: row.get("name"),
        elements: row.get("elements"),
        created_at: from_millis("forms", id, created_at_ms),
    }
}
