//! tplr Domain - Core types
//!
//! This crate defines the domain model for the tplr template resolver:
//! provider references, the path-expression context, the per-placeholder
//! error model, and secret payload handling.
//! All types here are pure Rust with no I/O dependencies.

pub mod context;
pub mod error;
pub mod marker;
pub mod reference;
pub mod secret;

pub use context::EvalContext;
pub use error::{ErrorKind, ExpressionError, ResolveError, ResolveResult};
pub use marker::{ERROR_MARKER_PREFIX, error_marker, has_error_markers};
pub use reference::{ProviderReference, ProviderTag};
pub use secret::select_secret_value;
