//! Construction of the default provider gateway.

use std::sync::Arc;

use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ssm::error::DisplayErrorContext;
use thiserror::Error;
use tplr_application::ports::ProviderGateway;

use crate::aws::{AwsSettings, SecretsManagerStore, SsmParameterStore, load_sdk_config};

/// Errors raised while building the AWS-backed gateway.
///
/// These are fatal for a run: no rendering is attempted.
#[derive(Debug, Error)]
pub enum GatewayInitError {
    /// No region could be resolved.
    #[error("no AWS region configured (set AWS_REGION, a profile region, or --region)")]
    MissingRegion,

    /// The configuration chain produced no credentials provider.
    #[error("no AWS credentials provider configured")]
    MissingCredentials,

    /// The credentials provider failed to produce credentials.
    #[error("failed to load AWS credentials: {0}")]
    Credentials(String),
}

/// Builds the default gateway from the standard AWS configuration chain.
///
/// The region is checked first, then credentials are loaded once so that
/// a misconfigured environment fails here instead of on every placeholder.
///
/// # Errors
///
/// Returns an error if no region resolves or credentials cannot be loaded.
pub async fn default_gateway(settings: &AwsSettings) -> Result<ProviderGateway, GatewayInitError> {
    let config = load_sdk_config(settings).await;

    let region = config.region().ok_or(GatewayInitError::MissingRegion)?;
    let provider = config
        .credentials_provider()
        .ok_or(GatewayInitError::MissingCredentials)?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| GatewayInitError::Credentials(DisplayErrorContext(&e).to_string()))?;

    tracing::debug!(region = %region, profile = ?settings.profile, "AWS providers initialized");

    Ok(gateway_from_config(&config))
}

/// Wires SSM and Secrets Manager clients from an already-loaded configuration.
#[must_use]
pub fn gateway_from_config(config: &SdkConfig) -> ProviderGateway {
    ProviderGateway::new(
        Arc::new(SsmParameterStore::new(config)),
        Arc::new(SecretsManagerStore::new(config)),
    )
}
