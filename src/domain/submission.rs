//! Answers submitted against a form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One respondent's answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub id: i64,
    /// Form this submission answers. Not checked against `forms`.
    pub form_schema_id: i64,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub form_schema_id: i64,
    pub data: String,
}

impl NewSubmission {
    pub fn new(form_schema_id: i64, data: impl Into<String>) -> Self {
        Self {
            form_schema_id,
            data: data.into(),
        }
    }
}
