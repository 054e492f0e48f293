//! Inline error markers

use std::fmt::Display;

/// Opening of an error marker as it appears in rendered output.
pub const ERROR_MARKER_PREFIX: &str = "{{ERROR:";

/// Formats the marker spliced into a document in place of a failed placeholder.
///
/// ```
/// assert_eq!(
///     tplr_domain::error_marker("secret x not found"),
///     "{{ERROR:secret x not found}}"
/// );
/// ```
#[must_use]
pub fn error_marker(message: impl Display) -> String {
    format!("{ERROR_MARKER_PREFIX}{message}}}}}")
}

/// Returns true if a rendered document contains at least one error marker.
#[must_use]
pub fn has_error_markers(rendered: &str) -> bool {
    rendered.contains(ERROR_MARKER_PREFIX)
}
