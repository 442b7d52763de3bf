//! Form definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored form definition.
///
/// `elements` is kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: i64,
    pub name: String,
    pub elements: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a form. Identity and timestamp are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForm {
    pub name: String,
    pub elements: String,
}

impl NewForm {
    pub fn new(name: impl Into<String>, elements: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: elements.into(),
        }
    }
}
