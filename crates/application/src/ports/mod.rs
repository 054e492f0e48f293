//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod cancellation;
mod gateway;
mod parameter_store;
mod secret_store;

pub use cancellation::{CancellationReceiver, CancellationToken};
pub use gateway::ProviderGateway;
pub use parameter_store::ParameterStore;
pub use secret_store::SecretStore;
