//! Secret store port
//!
//! Defines the interface for structured secret lookups.

use async_trait::async_trait;
use tplr_domain::ResolveResult;

/// Read-only access to a structured secret store.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetches a secret, optionally extracting one field from it.
    ///
    /// # Arguments
    /// * `id` - Fully evaluated secret identifier
    /// * `field` - Field to extract; `None` returns the raw payload
    ///
    /// # Errors
    /// - [`tplr_domain::ResolveError::SecretNotFound`] for unknown identifiers
    /// - [`tplr_domain::ResolveError::NoStringValue`] for binary-only secrets
    /// - [`tplr_domain::ResolveError::InvalidJson`] /
    ///   [`tplr_domain::ResolveError::KeyNotFound`] when field extraction fails
    /// - [`tplr_domain::ResolveError::Transport`] when the store cannot be reached
    ///
    /// Implementations usually delegate payload handling to
    /// [`tplr_domain::select_secret_value`].
    async fn get_secret(&self, id: &str, field: Option<&str>) -> ResolveResult<String>;
}
