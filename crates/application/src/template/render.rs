//! Render Template Use Case
//!
//! Substitutes every supported placeholder in a document with the value its
//! provider returns. A failing placeholder is replaced by an inline error
//! marker and rendering carries on with the rest of the document.

use std::time::Duration;

use tplr_domain::{EvalContext, error_marker};

use super::dispatcher::{Dispatch, Dispatcher};
use super::scanner::{has_placeholders, scan};
use crate::ports::{CancellationReceiver, ProviderGateway};

/// Use case for rendering a template document.
///
/// The gateway is injected; building a real one (and reporting failures to
/// do so) happens before rendering starts.
///
/// # Example
///
/// ```ignore
/// let gateway = tplr_infrastructure::default_gateway(&AwsSettings::default()).await?;
/// let use_case = RenderTemplate::new(gateway).with_call_timeout(Duration::from_secs(10));
///
/// let rendered = use_case.render("db={{aws:ssm:/app/db}}", "DEV").await;
/// ```
#[derive(Debug, Clone)]
pub struct RenderTemplate {
    gateway: ProviderGateway,
    call_timeout: Option<Duration>,
}

impl RenderTemplate {
    /// Creates the use case over the given gateway.
    #[must_use]
    pub const fn new(gateway: ProviderGateway) -> Self {
        Self {
            gateway,
            call_timeout: None,
        }
    }

    /// Bounds each provider call by `timeout`.
    #[must_use]
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Renders `document` for environment `env`.
    ///
    /// Never fails: per-placeholder errors are embedded as
    /// `{{ERROR:<message>}}`.
    pub async fn render(&self, document: &str, env: &str) -> String {
        self.render_with_cancellation(document, env, CancellationReceiver::never())
            .await
    }

    /// Renders `document`, aborting pending provider calls on cancellation.
    ///
    /// Placeholders whose call is aborted, and every placeholder reached
    /// after cancellation, are marked `{{ERROR:operation cancelled}}`; the
    /// returned document is still complete.
    pub async fn render_with_cancellation(
        &self,
        document: &str,
        env: &str,
        mut cancel: CancellationReceiver,
    ) -> String {
        if !has_placeholders(document) {
            return document.to_string();
        }

        let context = EvalContext::new(env);
        let dispatcher =
            Dispatcher::new(&self.gateway, &context).with_call_timeout(self.call_timeout);

        let mut output = String::with_capacity(document.len());
        let mut last_end = 0;
        let (mut resolved, mut failed, mut skipped) = (0usize, 0usize, 0usize);

        for placeholder in scan(document) {
            output.push_str(&document[last_end..placeholder.span.start]);

            match dispatcher.dispatch(placeholder.inner, &mut cancel).await {
                Dispatch::Resolved(value) => {
                    tracing::debug!(offset = placeholder.span.start, "Resolved placeholder");
                    output.push_str(&value);
                    resolved += 1;
                }
                Dispatch::Failed(error) => {
                    tracing::warn!(
                        offset = placeholder.span.start,
                        kind = error.kind().as_str(),
                        error = %error,
                        "Failed to resolve placeholder"
                    );
                    output.push_str(&error_marker(&error));
                    failed += 1;
                }
                Dispatch::Unsupported => {
                    output.push_str(placeholder.text);
                    skipped += 1;
                }
            }

            last_end = placeholder.span.end;
        }

        output.push_str(&document[last_end..]);

        tracing::debug!(resolved, failed, skipped, "Rendered document");
        output
    }
}

/// Renders `document` against `gateway` with no deadline or cancellation.
pub async fn process(document: &str, env: &str, gateway: &ProviderGateway) -> String {
    RenderTemplate::new(gateway.clone()).render(document, env).await
}
