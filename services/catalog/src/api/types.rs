//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the catalog REST API and OpenAPI schema
//! generation. The mutation payload keeps every field optional and
//! string-typed so the validator can check each declared rule independently
//! and report all problems at once.
use crate::model::{Model, ModelSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ModelListResponse {
    pub models: Vec<ModelSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ModelResponse {
    pub model: Model,
}

/// Full-record body accepted by create and edit, prior to validation.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
pub struct ModelPayload {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
    pub url: Option<String>,
    pub datasheet_url: Option<String>,
    pub modality: Option<String>,
    pub model_analysis: Option<String>,
    pub dependencies: Option<Vec<DependencyPayload>>,
    pub quality_control: Option<String>,
    pub access: Option<String>,
    pub size: Option<String>,
    pub license: Option<String>,
    pub intended_uses: Option<String>,
    pub prohibited_uses: Option<String>,
    pub monitoring: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
pub struct DependencyPayload {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// One declared rule the payload violated.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub code: String,
    pub errors: Vec<FieldProblem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
