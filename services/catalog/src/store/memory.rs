//! In-memory implementation of the catalog and account stores.
//!
//! # Purpose
//! Implements the `CatalogStore` and `AccountStore` traits entirely in memory
//! using `HashMap`s guarded by `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: write locks serialize mutations, read
//!   locks allow concurrent reads. Conflicting edits resolve last-writer-wins;
//!   there is no optimistic concurrency token.
//! - A mutation happens entirely under one write lock, so a failed create or
//!   edit never leaves a half-populated record visible to readers.
//!
//! # Metrics
//! The store updates a small set of gauges/counters so observability behavior
//! stays consistent with durable backends.
use super::{AccountStore, CatalogStore, StoreError, StoreResult};
use crate::model::{Account, Model, ModelSummary, NewModel, Role};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store backing both the catalog and the credential data.
///
/// All maps are wrapped in `Arc<RwLock<...>>` so the store can be cloned and
/// shared across async request handlers while writes stay serialized.
#[derive(Clone)]
pub struct InMemoryStore {
    /// Catalog records keyed by model id.
    models: Arc<RwLock<HashMap<String, Model>>>,
    /// Accounts keyed by account id. Usernames are unique.
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    /// Roles keyed by role id. Static reference data after seeding.
    roles: Arc<RwLock<HashMap<String, Role>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            models: Arc::new(RwLock::new(HashMap::new())),
            accounts: Arc::new(RwLock::new(HashMap::new())),
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn list_models(&self) -> StoreResult<Vec<ModelSummary>> {
        Ok(self.models.read().await.values().map(Model::summary).collect())
    }

    async fn get_model(&self, id: &str) -> StoreResult<Model> {
        self.models
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("model".into()))
    }

    async fn create_model(&self, draft: NewModel) -> StoreResult<Model> {
        let mut models = self.models.write().await;
        // Constraint check and insert happen under the same write lock, so a
        // rejected create is never partially visible.
        if models
            .values()
            .any(|model| model.name == draft.name && model.organization == draft.organization)
        {
            return Err(StoreError::Rejected(format!(
                "a model named {} is already registered for {}",
                draft.name, draft.organization
            )));
        }
        let model = draft.into_model(Uuid::new_v4().to_string());
        models.insert(model.id.clone(), model.clone());
        metrics::counter!("catalog_model_changes_total", "op" => "created").increment(1);
        metrics::gauge!("catalog_models_total").set(models.len() as f64);
        Ok(model)
    }

    async fn edit_model(&self, id: &str, draft: NewModel) -> StoreResult<Model> {
        let mut models = self.models.write().await;
        if !models.contains_key(id) {
            return Err(StoreError::NotFound("model".into()));
        }
        // The uniqueness constraint holds across edits as well: replacing a
        // record must not collide with a different record's identity.
        if models.values().any(|model| {
            model.id != id && model.name == draft.name && model.organization == draft.organization
        }) {
            return Err(StoreError::Rejected(format!(
                "a model named {} is already registered for {}",
                draft.name, draft.organization
            )));
        }
        // Full-record replace keyed by the existing id.
        let updated = draft.into_model(id.to_string());
        models.insert(id.to_string(), updated.clone());
        metrics::counter!("catalog_model_changes_total", "op" => "updated").increment(1);
        Ok(updated)
    }

    async fn delete_model(&self, id: &str) -> StoreResult<Model> {
        let mut models = self.models.write().await;
        let removed = models
            .remove(id)
            .ok_or_else(|| StoreError::NotFound("model".into()))?;
        metrics::counter!("catalog_model_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("catalog_models_total").set(models.len() as f64);
        Ok(removed)
    }

    async fn health_check(&self) -> StoreResult<()> {
        // In-memory backend is always "healthy" if the process is running.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn find_account_by_username(&self, username: &str) -> StoreResult<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|account| account.username == username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("account".into()))
    }

    async fn get_account(&self, id: &str) -> StoreResult<Account> {
        self.accounts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("account".into()))
    }

    async fn get_role(&self, id: &str) -> StoreResult<Role> {
        self.roles
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("role".into()))
    }

    async fn insert_account(&self, account: Account) -> StoreResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|existing| existing.username == account.username)
        {
            return Err(StoreError::Rejected(format!(
                "username {} already exists",
                account.username
            )));
        }
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn insert_role(&self, role: Role) -> StoreResult<Role> {
        self.roles.write().await.insert(role.id.clone(), role.clone());
        Ok(role)
    }
}
