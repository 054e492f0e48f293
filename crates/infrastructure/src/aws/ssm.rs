//! Parameter store implementation using AWS Systems Manager.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use tplr_application::ports::ParameterStore;
use tplr_domain::{ResolveError, ResolveResult};

/// `ParameterStore` adapter over the SSM `GetParameter` API.
///
/// Parameters are always requested with decryption, so `SecureString`
/// values come back in clear text.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// Creates a store from a loaded SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> ResolveResult<String> {
        tracing::debug!(name, "Fetching SSM parameter");

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| map_error(name, &e.into_service_error()))?;

        parameter_value(name, output.parameter().and_then(|p| p.value()))
    }
}

fn parameter_value(name: &str, value: Option<&str>) -> ResolveResult<String> {
    value
        .map(str::to_string)
        .ok_or_else(|| ResolveError::ParameterNotFound {
            name: name.to_string(),
        })
}

fn map_error(name: &str, error: &GetParameterError) -> ResolveError {
    if error.is_parameter_not_found() {
        return ResolveError::ParameterNotFound {
            name: name.to_string(),
        };
    }
    ResolveError::Transport(DisplayErrorContext(error).to_string())
}
