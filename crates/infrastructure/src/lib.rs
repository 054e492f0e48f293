//! tplr Infrastructure - Provider adapters
//!
//! Concrete implementations of the store ports defined in the
//! application layer:
//! - AWS Systems Manager Parameter Store and Secrets Manager
//! - In-memory stores for tests and embedding callers
//! - The default gateway factory

pub mod aws;
pub mod factory;
pub mod memory;

pub use aws::{AwsSettings, SecretsManagerStore, SsmParameterStore, load_sdk_config};
pub use factory::{GatewayInitError, default_gateway, gateway_from_config};
pub use memory::{InMemoryParameterStore, InMemorySecretStore, memory_gateway};
