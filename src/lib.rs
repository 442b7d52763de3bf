pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod service;

pub use config::Config;
pub use db::{init_db, FormRepository, MemoryRepository, Repository, StoreError};
pub use domain::{Form, FormElement, FormSubmission, NewForm, NewSubmission};
pub use error::AppError;
pub use service::{DefaultFormService, FormService, ServiceError};
