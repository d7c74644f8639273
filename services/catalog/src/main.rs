//! Catalog service entry point.
//!
//! # Purpose
//! Wires configuration, storage, the token service, and the HTTP router, then
//! starts the API server and the metrics listener.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic. Accounts are seeded from the configured fixtures file; the built-in
//! roles are always present.
mod api;
mod app;
mod auth;
mod config;
mod model;
mod observability;
mod store;

use app::{AppState, build_router};
use auth::token::TokenService;
use model::{Account, builtin_roles};
use std::future::Future;
use std::sync::Arc;
use store::{AccountStore, CatalogStore, memory::InMemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::CatalogConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::CatalogConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability();
    let state = build_state(&config).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state.clone());

    let addr = config.bind_addr;
    tracing::info!(
        %addr,
        backend = state.store.backend_name(),
        durable = state.store.is_durable(),
        "catalog service listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: &config::CatalogConfig) -> anyhow::Result<AppState> {
    let store = InMemoryStore::new();
    for role in builtin_roles() {
        store.insert_role(role).await?;
    }
    if let Some(path) = &config.accounts_file {
        let fixtures = config::load_account_fixtures(path)?;
        let count = fixtures.len();
        for fixture in fixtures {
            store
                .insert_account(Account {
                    id: uuid::Uuid::new_v4().to_string(),
                    username: fixture.username,
                    password_hash: fixture.password_hash,
                    role: fixture.role,
                })
                .await?;
        }
        tracing::info!(count, "seeded accounts");
    }

    Ok(AppState {
        store: Arc::new(store),
        tokens: TokenService::new(&config.token_secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use serial_test::serial;

    fn test_config() -> config::CatalogConfig {
        config::CatalogConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            token_secret: "test-secret".to_string(),
            accounts_file: None,
        }
    }

    #[tokio::test]
    async fn build_state_seeds_builtin_roles() {
        let state = build_state(&test_config()).await.expect("state");
        let role = state.store.get_role(model::ADMIN_ROLE_ID).await.expect("role");
        assert!(role.admin_permissions);
        let role = state
            .store
            .get_role(model::STANDARD_ROLE_ID)
            .await
            .expect("role");
        assert!(!role.admin_permissions);
    }

    #[tokio::test]
    async fn build_state_seeds_accounts_from_fixtures() {
        let dir = std::env::temp_dir().join("catalog-main-test");
        std::fs::create_dir_all(&dir).expect("tempdir");
        let path = dir.join("accounts.yaml");
        std::fs::write(
            &path,
            concat!(
                "- username: admin\n",
                "  password_hash: \"$argon2id$stub\"\n",
                "  role: admin\n",
            ),
        )
        .expect("write accounts");

        let mut config = test_config();
        config.accounts_file = Some(path.to_str().expect("path").to_string());
        let state = build_state(&config).await.expect("state");

        let account = state
            .store
            .find_account_by_username("admin")
            .await
            .expect("account");
        assert_eq!(account.role.as_deref(), Some("admin"));
        let err = state
            .store
            .find_account_by_username("missing")
            .await
            .expect_err("unknown");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
