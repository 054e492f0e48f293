//! AWS-backed provider adapters.

pub mod config;
pub mod secrets_manager;
pub mod ssm;

pub use config::{AwsSettings, load_sdk_config};
pub use secrets_manager::SecretsManagerStore;
pub use ssm::SsmParameterStore;
