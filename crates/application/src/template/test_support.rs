//! Hand-written provider stubs for template tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tplr_domain::{ResolveError, ResolveResult, select_secret_value};

use crate::ports::{ParameterStore, ProviderGateway, SecretStore};

/// In-memory parameter and secret store that counts provider calls.
#[derive(Clone, Default)]
pub struct StubStores {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    parameters: HashMap<String, String>,
    secrets: HashMap<String, String>,
    failures: HashMap<String, ResolveError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubStores {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner_mut(&mut self) -> &mut Inner {
        Arc::get_mut(&mut self.inner).expect("stub is configured before it is shared")
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.inner_mut()
            .parameters
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_secret(mut self, id: &str, payload: &str) -> Self {
        self.inner_mut()
            .secrets
            .insert(id.to_string(), payload.to_string());
        self
    }

    /// Every lookup of `key`, in either store, fails with `error`.
    pub fn with_failure(mut self, key: &str, error: ResolveError) -> Self {
        self.inner_mut().failures.insert(key.to_string(), error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.inner_mut().delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn gateway(&self) -> ProviderGateway {
        ProviderGateway::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }

    async fn enter(&self, key: &str) -> ResolveResult<()> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.inner.delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.failures.get(key).cloned().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl ParameterStore for StubStores {
    async fn get_parameter(&self, name: &str) -> ResolveResult<String> {
        self.enter(name).await?;
        self.inner
            .parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::ParameterNotFound {
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl SecretStore for StubStores {
    async fn get_secret(&self, id: &str, field: Option<&str>) -> ResolveResult<String> {
        self.enter(id).await?;
        let payload = self
            .inner
            .secrets
            .get(id)
            .ok_or_else(|| ResolveError::SecretNotFound { id: id.to_string() })?;
        select_secret_value(id, Some(payload), field)
    }
}
