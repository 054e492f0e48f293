//! Secret store implementation using AWS Secrets Manager.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use tplr_application::ports::SecretStore;
use tplr_domain::{ResolveError, ResolveResult, select_secret_value};

/// `SecretStore` adapter over the Secrets Manager `GetSecretValue` API.
#[derive(Debug, Clone)]
pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    /// Creates a store from a loaded SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret(&self, id: &str, field: Option<&str>) -> ResolveResult<String> {
        tracing::debug!(id, has_field = field.is_some(), "Fetching secret");

        let output = self
            .client
            .get_secret_value()
            .secret_id(id)
            .send()
            .await
            .map_err(|e| map_error(id, &e.into_service_error()))?;

        select_secret_value(id, output.secret_string(), field)
    }
}

fn map_error(id: &str, error: &GetSecretValueError) -> ResolveError {
    if error.is_resource_not_found_exception() {
        return ResolveError::SecretNotFound { id: id.to_string() };
    }
    ResolveError::Transport(DisplayErrorContext(error).to_string())
}
