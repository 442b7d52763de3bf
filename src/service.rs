//! Business rules in front of the repository.

use crate::db::{FormRepository, StoreError};
use crate::domain::{Form, FormSubmission, NewForm, NewSubmission};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Operations exposed to the HTTP layer.
#[async_trait]
pub trait FormService: Send + Sync {
    async fn create_form(&self, name: &str, elements: &str) -> Result<Form, ServiceError>;
    async fn list_forms(&self) -> Result<Vec<Form>, ServiceError>;
    async fn get_form(&self, id: i64) -> Result<Form, ServiceError>;
    async fn delete_form(&self, id: i64) -> Result<(), ServiceError>;
    async fn submit_form(&self, form_id: i64, data: &str) -> Result<FormSubmission, ServiceError>;
    async fn list_submissions(&self, form_id: i64) -> Result<Vec<FormSubmission>, ServiceError>;
    async fn delete_submission(&self, id: i64) -> Result<(), ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// `FormService` that validates required fields and delegates to a
/// repository.
pub struct DefaultFormService {
    repo: Arc<dyn FormRepository>,
}

impl DefaultFormService {
    pub fn new(repo: Arc<dyn FormRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FormService for DefaultFormService {
    async fn create_form(&self, name: &str, elements: &str) -> Result<Form, ServiceError> {
        if name.is_empty() || elements.is_empty() {
            return Err(ServiceError::Validation(
                "name and elements are required".to_string(),
            ));
        }

        Ok(self.repo.create(NewForm::new(name, elements)).await?)
    }

    async fn list_forms(&self) -> Result<Vec<Form>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    async fn get_form(&self, id: i64) -> Result<Form, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    async fn delete_form(&self, id: i64) -> Result<(), ServiceError> {
        Ok(self.repo.delete_form(id).await?)
    }

    async fn submit_form(&self, form_id: i64, data: &str) -> Result<FormSubmission, ServiceError> {
        if data.is_empty() {
            return Err(ServiceError::Validation(
                "submission data cannot be empty".to_string(),
            ));
        }

        Ok(self
            .repo
            .create_submission(NewSubmission::new(form_id, data))
            .await?)
    }

    async fn list_submissions(&self, form_id: i64) -> Result<Vec<FormSubmission>, ServiceError> {
        Ok(self.repo.find_submissions_by_form_id(form_id).await?)
    }

    async fn delete_submission(&self, id: i64) -> Result<(), ServiceError> {
        Ok(self.repo.delete_submission(id).await?)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.repo.ping().await?)
    }
}
