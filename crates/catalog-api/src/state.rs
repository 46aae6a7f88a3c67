//! # Application State
//!
//! Shared state for the Axum application.
//! Contains configuration, partner registry, token signer and catalog.

use crate::config::AppConfig;
use catalog_auth::{CredentialStore, TokenSigner};
use catalog_core::{CatalogService, InMemoryProductStore, SharedRepository};
use std::sync::Arc;

/// Default search paths for the partner registry
const PARTNERS_PATHS: [&str; 3] = [
    "config/partners.toml",
    "../config/partners.toml",
    "../../config/partners.toml",
];

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog service over the product store
    pub catalog: CatalogService,
    /// Partner registry (read-only)
    pub partners: Arc<CredentialStore>,
    /// Process-wide token signer
    pub signer: Arc<TokenSigner>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from environment variables with an empty product store
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let partners = match config.partners_file.as_deref() {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
                CredentialStore::from_toml(&content)?
            }
            None => CredentialStore::load(&PARTNERS_PATHS)?,
        };

        Ok(Self::from_parts(
            config,
            partners,
            Arc::new(InMemoryProductStore::new()),
        ))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        config: AppConfig,
        partners: CredentialStore,
        repository: SharedRepository,
    ) -> Self {
        let signer = TokenSigner::new(&config.secret_key);

        Self {
            catalog: CatalogService::new(repository),
            partners: Arc::new(partners),
            signer: Arc::new(signer),
            config,
        }
    }
}
