//! Catalog data model module.
//!
//! # Purpose
//! Re-exports the account/role and catalog record models used by the API and
//! store layers.
mod account;
mod record;

pub use account::{ADMIN_ROLE_ID, Account, Role, STANDARD_ROLE_ID, builtin_roles};
pub use record::{AccessLevel, Dependency, Model, ModelSummary, NewModel};
