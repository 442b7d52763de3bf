//! Repository layer for database operations.
//!
//! `FormRepository` is the storage capability the service depends on.
//! `Repository` implements it over SQLite; its methods are organized across
//! submodules by table:
//! - `forms.rs` - Form definitions (soft delete)
//! - `submissions.rs` - Form submissions (hard delete)
//!
//! `MemoryRepository` is an in-process implementation for tests.

mod forms;
mod memory;
mod submissions;

pub use memory::MemoryRepository;

use crate::domain::{Form, FormSubmission, NewForm, NewSubmission};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tracing::warn;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations for forms and their submissions.
#[async_trait]
pub trait FormRepository: Send + Sync {
    async fn create(&self, form: NewForm) -> Result<Form, StoreError>;

    /// All live forms, newest first.
    async fn find_all(&self) -> Result<Vec<Form>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Form, StoreError>;

    /// Soft-delete a form. Its submissions are left in place.
    async fn delete_form(&self, id: i64) -> Result<(), StoreError>;

    async fn create_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<FormSubmission, StoreError>;

    /// Submissions whose `form_schema_id` matches, newest first.
    async fn find_submissions_by_form_id(
        &self,
        form_id: i64,
    ) -> Result<Vec<FormSubmission>, StoreError>;

    async fn delete_submission(&self, id: i64) -> Result<(), StoreError>;

    /// Round trip to storage, used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// SQLite-backed repository.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }
}

#[async_trait]
impl FormRepository for Repository {
    async fn create(&self, form: NewForm) -> Result<Form, StoreError> {
        self.insert_form(&form).await
    }

    async fn find_all(&self) -> Result<Vec<Form>, StoreError> {
        self.query_forms().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Form, StoreError> {
        self.query_form(id).await
    }

    async fn delete_form(&self, id: i64) -> Result<(), StoreError> {
        self.soft_delete_form(id).await
    }

    async fn create_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<FormSubmission, StoreError> {
        self.insert_submission(&submission).await
    }

    async fn find_submissions_by_form_id(
        &self,
        form_id: i64,
    ) -> Result<Vec<FormSubmission>, StoreError> {
        self.query_submissions(form_id).await
    }

    async fn delete_submission(&self, id: i64) -> Result<(), StoreError> {
        self.remove_submission(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Convert a stored millisecond timestamp back into a `DateTime`.
fn from_millis(table: &str, id: i64, ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_else(|| {
        warn!(table, id, created_at = ms, "Stored timestamp out of range, using epoch");
        DateTime::default()
    })
}
