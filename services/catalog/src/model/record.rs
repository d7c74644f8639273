//! Catalog record model definitions.
//!
//! # Purpose
//! Defines the registered-model entity, its summary projection for list
//! responses, and the id-less draft produced by the validator and consumed by
//! create/edit.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a registered model can be obtained.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Open,
    Closed,
    Limited,
}

impl AccessLevel {
    /// Parse a wire value, trimming whitespace and ignoring ASCII case.
    /// Anything outside the three-member enumeration is rejected.
    pub fn parse(value: &str) -> Option<AccessLevel> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Some(AccessLevel::Open),
            "closed" => Some(AccessLevel::Closed),
            "limited" => Some(AccessLevel::Limited),
            _ => None,
        }
    }
}

/// An upstream artifact a model depends on (dataset, base model, ...).
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A registered machine-learning model, the primary managed resource.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_created: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,
    pub modality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_analysis: Option<String>,
    pub dependencies: Vec<Dependency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<String>,
    pub access: AccessLevel,
    pub size: String,
    pub license: String,
    pub intended_uses: String,
    pub prohibited_uses: String,
    pub monitoring: String,
    pub feedback: String,
}

impl Model {
    /// Reduced projection returned by the list endpoint.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            organization: self.organization.clone(),
            date_created: self.date_created,
            modality: self.modality.clone(),
            access: self.access,
            description: self.description.clone(),
        }
    }
}

/// Summary fields exposed by `GET /models/all`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub date_created: NaiveDate,
    pub modality: String,
    pub access: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A validated record draft without an identifier. The store assigns the id
/// on create; edit replaces every field of an existing record with the draft.
#[derive(Debug, Clone)]
pub struct NewModel {
    pub name: String,
    pub organization: String,
    pub description: Option<String>,
    pub date_created: NaiveDate,
    pub url: Option<String>,
    pub datasheet_url: Option<String>,
    pub modality: String,
    pub model_analysis: Option<String>,
    pub dependencies: Vec<Dependency>,
    pub quality_control: Option<String>,
    pub access: AccessLevel,
    pub size: String,
    pub license: String,
    pub intended_uses: String,
    pub prohibited_uses: String,
    pub monitoring: String,
    pub feedback: String,
}

impl NewModel {
    pub fn into_model(self, id: String) -> Model {
        Model {
            id,
            name: self.name,
            organization: self.organization,
            description: self.description,
            date_created: self.date_created,
            url: self.url,
            datasheet_url: self.datasheet_url,
            modality: self.modality,
            model_analysis: self.model_analysis,
            dependencies: self.dependencies,
            quality_control: self.quality_control,
            access: self.access,
            size: self.size,
            license: self.license,
            intended_uses: self.intended_uses,
            prohibited_uses: self.prohibited_uses,
            monitoring: self.monitoring,
            feedback: self.feedback,
        }
    }
}
