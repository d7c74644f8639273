use crate::model::{Account, Model, ModelSummary, NewModel, Role};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    /// Persistence-layer refusal (constraint violation), distinct from the
    /// field validator's rejection.
    #[error("rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Catalog record persistence. The only owner of model records; every
/// mutation goes through the validated orchestrator path before reaching it.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Summary projection of every record. An empty catalog is a valid state.
    async fn list_models(&self) -> StoreResult<Vec<ModelSummary>>;
    async fn get_model(&self, id: &str) -> StoreResult<Model>;
    async fn create_model(&self, draft: NewModel) -> StoreResult<Model>;
    /// Full-record replace. Editing an unknown id is `NotFound`, never an
    /// implicit create.
    async fn edit_model(&self, id: &str, draft: NewModel) -> StoreResult<Model>;
    /// Returns the removed record.
    async fn delete_model(&self, id: &str) -> StoreResult<Model>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}

/// Account and role persistence, read-only from the request path. The insert
/// methods exist for the out-of-band seeding done at startup and in tests.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_account_by_username(&self, username: &str) -> StoreResult<Account>;
    async fn get_account(&self, id: &str) -> StoreResult<Account>;
    async fn get_role(&self, id: &str) -> StoreResult<Role>;
    async fn insert_account(&self, account: Account) -> StoreResult<Account>;
    async fn insert_role(&self, role: Role) -> StoreResult<Role>;
}

/// Combined store surface the application state carries.
pub trait CatalogAuthStore: CatalogStore + AccountStore {}

impl<T: CatalogStore + AccountStore> CatalogAuthStore for T {}
