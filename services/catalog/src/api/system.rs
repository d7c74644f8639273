//! System/health API handlers.
//!
//! # Purpose
//! Lightweight health endpoint for probes and automation. Health checks must
//! be fast and side-effect free.
use crate::api::error::{ApiError, api_internal};
use crate::api::types::HealthStatus;
use crate::app::AppState;
use crate::store::CatalogStore;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Catalog service health", body = HealthStatus),
        (status = 500, description = "Backing store unavailable")
    )
)]
pub(crate) async fn system_health(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, ApiError> {
    // Probe the backing store to surface dependency availability.
    if let Err(err) = state.store.health_check().await {
        return Err(api_internal("storage unavailable", &err));
    }
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}
