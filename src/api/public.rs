//! Server-rendered view of a form for respondents.

use askama::Template;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::api::AppState;
use crate::domain::{parse_elements, FormElement};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "view_form.html")]
struct ViewFormTemplate {
    id: i64,
    name: String,
    elements: Vec<FormElement>,
}

pub async fn view_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let form = state.service.get_form(id).await?;

    let elements = parse_elements(&form.elements)
        .map_err(|e| AppError::Render(format!("Failed to parse form data: {}", e)))?;

    let template = ViewFormTemplate {
        id: form.id,
        name: form.name,
        elements,
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_renders_each_element_kind() {
        let elements = parse_elements(
            r#"[
                {"id":"q1","type":"text","label":"Full name","required":true,"placeholder":"Jane"},
                {"id":"q2","type":"textarea","label":"Comments"},
                {"id":"q3","type":"select","label":"Colour","options":["Red","Blue"]},
                {"id":"q4","type":"stars","label":"Rating"}
            ]"#,
        )
        .unwrap();

        let html = ViewFormTemplate {
            id: 3,
            name: "Survey".to_string(),
            elements,
        }
        .render()
        .unwrap();

        assert!(html.contains("<title>Survey</title>"));
        assert!(html.contains(r#"name="q1""#));
        assert!(html.contains(r#"placeholder="Jane""#));
        assert!(html.contains("<textarea"));
        assert!(html.contains(">Blue</option>"));
        assert!(html.contains(r#"data-field="q4""#));
        assert!(html.contains("const FORM_ID = 3;"));
    }

    #[test]
    fn test_template_escapes_labels() {
        let elements = parse_elements(
            r#"[{"id":"q1","type":"text","label":"<script>alert(1)</script>"}]"#,
        )
        .unwrap();

        let html = ViewFormTemplate {
            id: 1,
            name: "<b>Survey</b>".to_string(),
            elements,
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(!html.contains("<b>Survey</b>"));
    }
}
