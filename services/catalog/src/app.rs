//! Catalog HTTP application wiring.
//!
//! # Purpose
//! Builds the axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and
//! testable. The token service is part of the state (not a process global)
//! so tests can substitute their own instance and secret.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::auth::token::TokenService;
use crate::store::CatalogAuthStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogAuthStore + Send + Sync>,
    pub tokens: TokenService,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/accounts/login",
            axum::routing::post(api::accounts::login),
        )
        .route(
            "/accounts/logintoken",
            axum::routing::post(api::accounts::login_with_token),
        )
        .route("/models/all", axum::routing::get(api::models::list_models))
        .route("/models", axum::routing::post(api::models::create_model))
        .route(
            "/models/:model_id",
            axum::routing::get(api::models::get_model)
                .put(api::models::edit_model)
                .delete(api::models::delete_model),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}
