//! OpenAPI document assembly.
//!
//! # Purpose
//! Collects the annotated paths and schemas into the document served at
//! `/openapi.json` and rendered by the Swagger UI mounted at `/docs`.
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::system::system_health,
        crate::api::accounts::login,
        crate::api::accounts::login_with_token,
        crate::api::models::list_models,
        crate::api::models::get_model,
        crate::api::models::create_model,
        crate::api::models::edit_model,
        crate::api::models::delete_model,
    ),
    components(schemas(
        crate::api::types::LoginRequest,
        crate::api::types::TokenResponse,
        crate::api::types::ModelListResponse,
        crate::api::types::ModelResponse,
        crate::api::types::ModelPayload,
        crate::api::types::DependencyPayload,
        crate::api::types::ErrorResponse,
        crate::api::types::FieldProblem,
        crate::api::types::ValidationErrorResponse,
        crate::api::types::HealthStatus,
        crate::model::Model,
        crate::model::ModelSummary,
        crate::model::Dependency,
        crate::model::AccessLevel,
    )),
    tags(
        (name = "accounts", description = "Login and token refresh"),
        (name = "models", description = "Catalog record CRUD"),
        (name = "system", description = "Health and metadata")
    )
)]
pub struct ApiDoc;
