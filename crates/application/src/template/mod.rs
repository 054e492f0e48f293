//! Template rendering module
//!
//! Two independent layers:
//! - the outer layer scans a document for `{{...}}` placeholders and
//!   dispatches each to a provider by its tag;
//! - the inner layer evaluates the path expression carried by a reference
//!   (`/app/{{env | toLower}}/db`).
//!
//! The dispatcher is the only point where the two meet.
//!
//! # Usage
//!
//! ```
//! use tplr_application::template::{evaluate, scan};
//! use tplr_domain::EvalContext;
//!
//! let inners: Vec<_> = scan("url={{aws:ssm:/svc/url}}").map(|p| p.inner).collect();
//! assert_eq!(inners, vec!["aws:ssm:/svc/url"]);
//!
//! let path = evaluate("/svc/{{env | toLower}}", &EvalContext::new("PROD")).unwrap();
//! assert_eq!(path, "/svc/prod");
//! ```

pub mod dispatcher;
pub mod expression;
pub mod render;
pub mod scanner;

#[cfg(test)]
mod test_support;

pub use dispatcher::{Dispatch, Dispatcher};
pub use expression::{Function, PathTemplate, evaluate};
pub use render::{RenderTemplate, process};
pub use scanner::{Placeholder, has_placeholders, scan};
