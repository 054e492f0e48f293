//! Parameter store port
//!
//! Defines the interface for flat key-value parameter lookups.

use async_trait::async_trait;
use tplr_domain::ResolveResult;

/// Read-only access to a flat key-value parameter store.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches the value of a parameter.
    ///
    /// Encrypted parameters are returned decrypted.
    ///
    /// # Arguments
    /// * `name` - Fully evaluated parameter name
    ///
    /// # Errors
    /// Returns [`tplr_domain::ResolveError::ParameterNotFound`] for unknown
    /// names and [`tplr_domain::ResolveError::Transport`] when the store
    /// cannot be reached.
    async fn get_parameter(&self, name: &str) -> ResolveResult<String>;
}
