//! Domain types for the form builder.
//!
//! This module provides:
//! - `Form` and `FormSubmission` as persisted and returned to clients
//! - `NewForm` and `NewSubmission` insert payloads
//! - `FormElement`, the field descriptor parsed for the HTML view

pub mod element;
pub mod form;
pub mod submission;

pub use element::{parse_elements, FormElement};
pub use form::{Form, NewForm};
pub use submission::{FormSubmission, NewSubmission};
