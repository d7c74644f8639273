use catalog::app::{AppState, build_router};
use catalog::auth::password::hash_password;
use catalog::auth::token::TokenService;
use catalog::model::{ADMIN_ROLE_ID, Account, builtin_roles};
use catalog::store::AccountStore;
use catalog::store::memory::InMemoryStore;
use std::sync::Arc;

pub const TEST_SECRET: &str = "catalog-test-secret";
pub const TEST_PASSWORD: &str = "testPass";

pub struct TestContext {
    pub tokens: TokenService,
    pub admin_id: String,
    pub user_id: String,
}

/// Build a router over a store seeded with the built-in roles, one admin
/// account, and one standard account.
pub async fn test_app() -> (axum::Router, TestContext) {
    let store = InMemoryStore::new();
    for role in builtin_roles() {
        store.insert_role(role).await.expect("role");
    }
    let password_hash = hash_password(TEST_PASSWORD).expect("hash");
    store
        .insert_account(Account {
            id: "acc-admin".to_string(),
            username: "adminUser".to_string(),
            password_hash: password_hash.clone(),
            role: Some(ADMIN_ROLE_ID.to_string()),
        })
        .await
        .expect("admin account");
    store
        .insert_account(Account {
            id: "acc-user".to_string(),
            username: "normalUser".to_string(),
            password_hash,
            role: None,
        })
        .await
        .expect("user account");

    let tokens = TokenService::new(TEST_SECRET);
    let state = AppState {
        store: Arc::new(store),
        tokens: tokens.clone(),
    };
    (
        build_router(state),
        TestContext {
            tokens,
            admin_id: "acc-admin".to_string(),
            user_id: "acc-user".to_string(),
        },
    )
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
