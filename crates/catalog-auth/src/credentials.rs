//! # Partner Credentials
//!
//! Read-only registry of partners allowed to log in.
//! Loaded once at startup from `config/partners.toml` when present,
//! otherwise the built-in registry is used.

use crate::error::{AuthError, AuthResult};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

/// A partner allowed to call the API
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PartnerCredential {
    /// Client identifier sent on login
    pub client_id: String,

    /// Shared secret sent on login as `client_secret`
    pub secret: String,

    /// Permission set (currently one shared set for every partner)
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl PartnerCredential {
    pub fn new<I, S>(client_id: impl Into<String>, secret: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl std::fmt::Debug for PartnerCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartnerCredential")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("permissions", &self.permissions)
            .finish()
    }
}

/// On-disk shape of `partners.toml`
#[derive(Debug, Deserialize)]
struct PartnersFile {
    #[serde(default)]
    partners: Vec<PartnerCredential>,
}

/// Registry of partner credentials, keyed by client id
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    partners: HashMap<String, PartnerCredential>,
}

impl CredentialStore {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the single development partner
    pub fn builtin() -> Self {
        Self::from_partners([PartnerCredential::new(
            "partner_123",
            "super_secret_key_123",
            ["read", "write"],
        )])
    }

    pub fn from_partners(partners: impl IntoIterator<Item = PartnerCredential>) -> Self {
        Self {
            partners: partners
                .into_iter()
                .map(|p| (p.client_id.clone(), p))
                .collect(),
        }
    }

    /// Parse a registry from TOML (`[[partners]]` tables)
    pub fn from_toml(toml_str: &str) -> AuthResult<Self> {
        let file: PartnersFile = toml::from_str(toml_str)
            .map_err(|e| AuthError::Configuration(format!("invalid partners file: {}", e)))?;
        Ok(Self::from_partners(file.partners))
    }

    /// Load from the first readable path, falling back to [`Self::builtin`]
    pub fn load(paths: &[&str]) -> AuthResult<Self> {
        for path in paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                let store = Self::from_toml(&content)?;
                tracing::info!("Loaded {} partners from {}", store.len(), path);
                return Ok(store);
            }
        }

        tracing::warn!("No partners file found, using built-in partner registry");
        Ok(Self::builtin())
    }

    /// Find a partner by client id. `None` means unknown partner.
    pub fn lookup(&self, client_id: &str) -> Option<&PartnerCredential> {
        self.partners.get(client_id)
    }

    /// Check a login attempt. Unknown partners and wrong secrets are
    /// reported identically.
    pub fn authenticate(&self, client_id: &str, client_secret: &str) -> AuthResult<&PartnerCredential> {
        self.lookup(client_id)
            .filter(|p| constant_time_compare(&p.secret, client_secret))
            .ok_or(AuthError::InvalidCredentials)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
