use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::AppState;
use crate::domain::FormSubmission;
use crate::error::AppError;

/// Body of `POST /api/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitFormRequest {
    pub form_schema_id: i64,
    /// JSON-encoded answers, stored as given.
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitFormResponse {
    pub message: &'static str,
}

pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Json<SubmitFormRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitFormResponse>), AppError> {
    let Json(req) = payload?;

    let submission = state
        .service
        .submit_form(req.form_schema_id, &req.data)
        .await?;
    info!(
        submission_id = submission.id,
        form_id = submission.form_schema_id,
        "Submission saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitFormResponse {
            message: "Submission saved successfully",
        }),
    ))
}

pub async fn list_submissions(
    State(state): State<AppState>,
    form_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<FormSubmission>>, AppError> {
    let Path(form_id) = form_id?;
    Ok(Json(state.service.list_submissions(form_id).await?))
}

pub async fn delete_submission(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.service.delete_submission(id).await?;
    info!(submission_id = id, "Submission deleted");

    Ok(StatusCode::NO_CONTENT)
}
