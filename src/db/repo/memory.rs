//! In-memory repository for testing without SQLite.

use super::{FormRepository, StoreError};
use crate::domain::{Form, FormSubmission, NewForm, NewSubmission};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tables {
    next_form_id: i64,
    next_submission_id: i64,
    forms: Vec<(Form, bool)>,
    submissions: Vec<FormSubmission>,
}

/// Repository that keeps rows in process memory.
///
/// Mirrors `Repository` semantics: forms are soft-deleted, submissions are
/// removed, listings are newest first.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored forms, including soft-deleted ones.
    pub fn form_rows(&self) -> usize {
        self.lock().forms.len()
    }

    pub fn submission_rows(&self) -> usize {
        self.lock().submissions.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl FormRepository for MemoryRepository {
    async fn create(&self, form: NewForm) -> Result<Form, StoreError> {
        let mut tables = self.lock();
        tables.next_form_id += 1;
        let form = Form {
            id: tables.next_form_id,
            name: form.name,
            elements: form.elements,
            created_at: Utc::now(),
        };
        tables.forms.push((form.clone(), false));
        Ok(form)
    }

    async fn find_all(&self) -> Result<Vec<Form>, StoreError> {
        let tables = self.lock();
        let mut forms: Vec<Form> = tables
            .forms
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(form, _)| form.clone())
            .collect();
        forms.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(forms)
    }

    async fn find_by_id(&self, id: i64) -> Result<Form, StoreError> {
        self.lock()
            .forms
            .iter()
            .find(|(form, deleted)| form.id == id && !deleted)
            .map(|(form, _)| form.clone())
            .ok_or_else(|| StoreError::NotFound(format!("form {}", id)))
    }

    async fn delete_form(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        match tables
            .forms
            .iter_mut()
            .find(|(form, deleted)| form.id == id && !deleted)
        {
            Some((_, deleted)) => {
                *deleted = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("form {}", id))),
        }
    }

    async fn create_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<FormSubmission, StoreError> {
        let mut tables = self.lock();
        tables.next_submission_id += 1;
        let submission = FormSubmission {
            id: tables.next_submission_id,
            form_schema_id: submission.form_schema_id,
            data: submission.data,
            created_at: Utc::now(),
        };
        tables.submissions.push(submission.clone());
        Ok(submission)
    }

    async fn find_submissions_by_form_id(
        &self,
        form_id: i64,
    ) -> Result<Vec<FormSubmission>, StoreError> {
        let tables = self.lock();
        let mut submissions: Vec<FormSubmission> = tables
            .submissions
            .iter()
            .filter(|s| s.form_schema_id == form_id)
            .cloned()
            .collect();
        submissions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(submissions)
    }

    async fn delete_submission(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let before = tables.submissions.len();
        tables.submissions.retain(|s| s.id != id);
        if tables.submissions.len() == before {
            return Err(StoreError::NotFound(format!("submission {}", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
