use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::AppState;
use crate::domain::Form;
use crate::error::AppError;

/// Body of `POST /api/forms`. Missing fields decode as empty and fail
/// validation in the service.
#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub elements: String,
}

pub async fn create_form(
    State(state): State<AppState>,
    payload: Result<Json<CreateFormRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Form>), AppError> {
    let Json(req) = payload?;

    let form = state.service.create_form(&req.name, &req.elements).await?;
    info!(form_id = form.id, name = %form.name, "Form created");

    Ok((StatusCode::CREATED, Json(form)))
}

pub async fn list_forms(State(state): State<AppState>) -> Result<Json<Vec<Form>>, AppError> {
    let forms = state.service.list_forms().await?;
    debug!(count = forms.len(), "Listed forms");
    Ok(Json(forms))
}

pub async fn get_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Form>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.service.get_form(id).await?))
}

pub async fn delete_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.service.delete_form(id).await?;
    info!(form_id = id, "Form deleted");

    Ok(StatusCode::NO_CONTENT)
}
