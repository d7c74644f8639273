use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";

// Catalog service configuration sourced from environment variables, with an
// optional YAML override file (CATALOG_CONFIG).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    /// Process-wide token signing secret, read-only at request time.
    pub token_secret: String,
    /// Optional YAML file with accounts to seed at startup. Accounts are
    /// created out-of-band; there is no self-registration endpoint.
    pub accounts_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    token_secret: Option<String>,
    accounts_file: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("CATALOG_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse CATALOG_BIND")?;
        let metrics_bind = std::env::var("CATALOG_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse CATALOG_METRICS_BIND")?;
        let token_secret =
            std::env::var("CATALOG_TOKEN_SECRET").with_context(|| "CATALOG_TOKEN_SECRET not set")?;
        let accounts_file = std::env::var("CATALOG_ACCOUNTS").ok();
        Ok(Self {
            bind_addr,
            metrics_bind,
            token_secret,
            accounts_file,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("CATALOG_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read CATALOG_CONFIG: {path}"))?;
            let override_cfg: CatalogConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse catalog config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.token_secret {
                config.token_secret = value;
            }
            if let Some(value) = override_cfg.accounts_file {
                config.accounts_file = Some(value);
            }
        }
        Ok(config)
    }
}

/// One entry of the accounts seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountFixture {
    pub username: String,
    /// Argon2id PHC string; the seed file never carries plaintext passwords.
    pub password_hash: String,
    #[serde(default)]
    pub role: Option<String>,
}

pub fn load_account_fixtures(path: &str) -> Result<Vec<AccountFixture>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read accounts file: {path}"))?;
    serde_yaml::from_str(&contents).with_context(|| "parse accounts yaml")
}
