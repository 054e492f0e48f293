//! Provider gateway
//!
//! Bundles the two provider ports behind one value that callers inject into
//! the render use case.

use std::fmt;
use std::sync::Arc;

use super::{ParameterStore, SecretStore};

/// The pair of providers a document is resolved against.
///
/// Cloning is cheap; both stores are shared.
#[derive(Clone)]
pub struct ProviderGateway {
    parameters: Arc<dyn ParameterStore>,
    secrets: Arc<dyn SecretStore>,
}

impl ProviderGateway {
    /// Creates a gateway from already constructed stores.
    #[must_use]
    pub fn new(parameters: Arc<dyn ParameterStore>, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            parameters,
            secrets,
        }
    }

    /// The parameter store.
    #[must_use]
    pub fn parameters(&self) -> &dyn ParameterStore {
        self.parameters.as_ref()
    }

    /// The secret store.
    #[must_use]
    pub fn secrets(&self) -> &dyn SecretStore {
        self.secrets.as_ref()
    }
}

impl fmt::Debug for ProviderGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderGateway").finish_non_exhaustive()
    }
}
