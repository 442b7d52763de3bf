//! Field descriptors carried inside a form's `elements` string.
//!
//! The backend stores `elements` verbatim. Parsing only happens when a form
//! is rendered to HTML.

use serde::{Deserialize, Deserializer, Serialize};

/// A single input field on a form.
///
/// Missing keys and `null` values decode to empty defaults; only a
/// non-list payload or a value of the wrong type is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormElement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Choices for `select` elements.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

const DEFAULT_CHOICES: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

impl FormElement {
    /// HTML `type` attribute for elements rendered as a plain `<input>`.
    pub fn input_type(&self) -> &str {
        match self.kind.as_str() {
            "phone" => "tel",
            "email" => "email",
            "date" => "date",
            _ => "text",
        }
    }

    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    /// Options offered by a `select` element, falling back to generic
    /// choices when the builder saved none.
    pub fn choices(&self) -> Vec<&str> {
        if self.options.is_empty() {
            DEFAULT_CHOICES.to_vec()
        } else {
            self.options.iter().map(String::as_str).collect()
        }
    }
}

/// Parse a stored `elements` string into field descriptors.
pub fn parse_elements(raw: &str) -> Result<Vec<FormElement>, serde_json::Error> {
    serde_json::from_str(raw)
}
