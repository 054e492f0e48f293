//! Provider dispatch
//!
//! Routes the inner text of one placeholder to the provider named by its tag,
//! after evaluating the path expression.

use std::future::Future;
use std::time::Duration;

use tplr_domain::{EvalContext, ProviderReference, ResolveError, ResolveResult};

use super::expression::evaluate;
use crate::ports::{CancellationReceiver, ProviderGateway};

/// Outcome of dispatching one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The provider returned a value.
    Resolved(String),
    /// Evaluation or the provider call failed.
    Failed(ResolveError),
    /// No known provider prefix; the placeholder is left as written.
    Unsupported,
}

/// Resolves placeholders against a gateway for one evaluation context.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    gateway: &'a ProviderGateway,
    context: &'a EvalContext,
    call_timeout: Option<Duration>,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher with no per-call deadline.
    #[must_use]
    pub const fn new(gateway: &'a ProviderGateway, context: &'a EvalContext) -> Self {
        Self {
            gateway,
            context,
            call_timeout: None,
        }
    }

    /// Sets the deadline applied to each provider call.
    #[must_use]
    pub const fn with_call_timeout(mut self, call_timeout: Option<Duration>) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Classifies `inner` and, for a supported tag, issues exactly one
    /// provider call.
    pub async fn dispatch(&self, inner: &str, cancel: &mut CancellationReceiver) -> Dispatch {
        let Some(reference) = ProviderReference::parse(inner) else {
            return Dispatch::Unsupported;
        };

        tracing::debug!(provider = reference.tag().name(), "Dispatching placeholder");

        match self.resolve(&reference, cancel).await {
            Ok(value) => Dispatch::Resolved(value),
            Err(error) => Dispatch::Failed(error),
        }
    }

    /// Evaluates the reference's path and fetches its value.
    ///
    /// # Errors
    ///
    /// Returns the expression or provider error for this reference. Nothing
    /// is fetched when the path expression fails.
    pub async fn resolve(
        &self,
        reference: &ProviderReference,
        cancel: &mut CancellationReceiver,
    ) -> ResolveResult<String> {
        let target = evaluate(reference.path(), self.context)?;

        match reference {
            ProviderReference::Parameter { .. } => {
                self.call(self.gateway.parameters().get_parameter(&target), cancel)
                    .await
            }
            ProviderReference::Secret { field, .. } => {
                self.call(
                    self.gateway.secrets().get_secret(&target, field.as_deref()),
                    cancel,
                )
                .await
            }
        }
    }

    /// Races a provider call against cancellation and the call deadline.
    async fn call<F>(&self, request: F, cancel: &mut CancellationReceiver) -> ResolveResult<String>
    where
        F: Future<Output = ResolveResult<String>>,
    {
        let request = async {
            match self.call_timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or_else(|_| {
                        Err(ResolveError::Timeout {
                            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                        })
                    }),
                None => request.await,
            }
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ResolveError::Cancelled),
            result = request => result,
        }
    }
}
