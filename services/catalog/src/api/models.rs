//! Catalog record API handlers.
//!
//! # Purpose
//! Sequences the mutation pipeline for each endpoint (authentication gate,
//! authorization gate, existence check for edit, field validation, then
//! persistence) and maps every outcome onto the shared error type. Read
//! endpoints skip the gates. Authorization always runs before validation, so
//! an unauthorized caller never learns whether its payload would have been
//! valid.
use crate::api::error::{
    ApiError, api_internal, api_not_found, api_store_rejected, api_validation_errors,
};
use crate::api::types::{ModelListResponse, ModelPayload, ModelResponse};
use crate::api::validate;
use crate::app::AppState;
use crate::auth::gate;
use crate::store::{CatalogStore, StoreError};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/models/all",
    tag = "models",
    responses(
        (status = 200, description = "Summary list of registered models", body = ModelListResponse),
        (status = 404, description = "Empty catalog", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, ApiError> {
    let models = state
        .store
        .list_models()
        .await
        .map_err(|err| api_internal("failed to list models", &err))?;
    if models.is_empty() {
        return Err(api_not_found("No results to display"));
    }
    Ok(Json(ModelListResponse { models }))
}

#[utoipa::path(
    get,
    path = "/models/{model_id}",
    tag = "models",
    params(
        ("model_id" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 200, description = "Full model record", body = ModelResponse),
        (status = 404, description = "No such model", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_model(
    Path(model_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ModelResponse>, ApiError> {
    match state.store.get_model(&model_id).await {
        Ok(model) => Ok(Json(ModelResponse { model })),
        Err(StoreError::NotFound(_)) => Err(api_not_found("A model with this id was not found")),
        Err(err) => Err(api_internal("failed to load model", &err)),
    }
}

#[utoipa::path(
    post,
    path = "/models",
    tag = "models",
    request_body = ModelPayload,
    responses(
        (status = 201, description = "Model created", body = ModelResponse),
        (status = 400, description = "Validation failed or store rejected"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an administrator")
    )
)]
pub(crate) async fn create_model(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ModelPayload>,
) -> Result<impl IntoResponse, ApiError> {
    gate::require_admin(&state, &headers).await?;
    let draft = validate::model_from_payload(&body).map_err(api_validation_errors)?;
    match state.store.create_model(draft).await {
        Ok(model) => Ok((StatusCode::CREATED, Json(ModelResponse { model }))),
        Err(StoreError::Rejected(message)) => Err(api_store_rejected(&message)),
        Err(err) => Err(api_internal("failed to create model", &err)),
    }
}

#[utoipa::path(
    put,
    path = "/models/{model_id}",
    tag = "models",
    params(
        ("model_id" = String, Path, description = "Model identifier")
    ),
    request_body = ModelPayload,
    responses(
        (status = 204, description = "Model replaced"),
        (status = 400, description = "Validation failed or store rejected"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "No such model")
    )
)]
pub(crate) async fn edit_model(
    Path(model_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ModelPayload>,
) -> Result<StatusCode, ApiError> {
    gate::require_admin(&state, &headers).await?;
    // The record must exist before the payload is validated; editing an
    // unknown id is never an implicit create.
    match state.store.get_model(&model_id).await {
        Ok(_) => {}
        Err(StoreError::NotFound(_)) => {
            return Err(api_not_found("A model with this id was not found"));
        }
        Err(err) => return Err(api_internal("failed to load model", &err)),
    }
    let draft = validate::model_from_payload(&body).map_err(api_validation_errors)?;
    match state.store.edit_model(&model_id, draft).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(_)) => Err(api_not_found("A model with this id was not found")),
        Err(StoreError::Rejected(message)) => Err(api_store_rejected(&message)),
        Err(err) => Err(api_internal("failed to edit model", &err)),
    }
}

#[utoipa::path(
    delete,
    path = "/models/{model_id}",
    tag = "models",
    params(
        ("model_id" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 204, description = "Model deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "No such model")
    )
)]
pub(crate) async fn delete_model(
    Path(model_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    gate::require_admin(&state, &headers).await?;
    match state.store.delete_model(&model_id).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(_)) => Err(api_not_found("A model with this id was not found")),
        Err(err) => Err(api_internal("failed to delete model", &err)),
    }
}
