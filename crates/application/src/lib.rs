//! tplr Application - Rendering and ports
//!
//! This crate defines the application layer with:
//! - Port traits for the parameter and secret stores
//! - The placeholder scanner and path expression evaluator
//! - The render use case that ties them together

pub mod ports;
pub mod template;

pub use ports::{
    CancellationReceiver, CancellationToken, ParameterStore, ProviderGateway, SecretStore,
};
pub use template::{RenderTemplate, process};
