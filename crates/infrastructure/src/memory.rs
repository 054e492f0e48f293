//! In-memory provider adapters.
//!
//! Used by tests and embedding callers. Secrets go through the same payload
//! selection as the Secrets Manager adapter, so `#key` behaves identically.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tplr_application::ports::{ParameterStore, ProviderGateway, SecretStore};
use tplr_domain::{ResolveError, ResolveResult, select_secret_value};

/// Parameter store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParameterStore {
    parameters: HashMap<String, String>,
}

impl InMemoryParameterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn get_parameter(&self, name: &str) -> ResolveResult<String> {
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::ParameterNotFound {
                name: name.to_string(),
            })
    }
}

/// Secret store backed by a map.
///
/// A `None` payload models a secret that only carries binary data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, Option<String>>,
}

impl InMemorySecretStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret with a string payload.
    #[must_use]
    pub fn with_secret(mut self, id: impl Into<String>, payload: impl Into<String>) -> Self {
        self.secrets.insert(id.into(), Some(payload.into()));
        self
    }

    /// Adds a secret without a string payload.
    #[must_use]
    pub fn with_binary_secret(mut self, id: impl Into<String>) -> Self {
        self.secrets.insert(id.into(), None);
        self
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, id: &str, field: Option<&str>) -> ResolveResult<String> {
        let payload = self
            .secrets
            .get(id)
            .ok_or_else(|| ResolveError::SecretNotFound { id: id.to_string() })?;
        select_secret_value(id, payload.as_deref(), field)
    }
}

/// Builds a gateway over the given in-memory stores.
#[must_use]
pub fn memory_gateway(
    parameters: InMemoryParameterStore,
    secrets: InMemorySecretStore,
) -> ProviderGateway {
    ProviderGateway::new(Arc::new(parameters), Arc::new(secrets))
}
