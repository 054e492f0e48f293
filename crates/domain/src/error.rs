//! Domain error types

use thiserror::Error;

/// Errors produced while parsing or executing a path expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The expression is syntactically malformed.
    #[error("template parse error: {0}")]
    Parse(String),

    /// The expression parsed but could not be evaluated.
    #[error("template execution error: {0}")]
    Execution(String),
}

/// Broad classification of a placeholder resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path expression failed to parse or evaluate.
    Expression,
    /// The requested parameter, secret, or field does not exist.
    NotFound,
    /// The provider call itself failed (auth, network, throttling, deadline).
    Transport,
    /// The secret payload does not have the expected shape.
    PayloadShape,
}

impl ErrorKind {
    /// Short lowercase label, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::NotFound => "not_found",
            Self::Transport => "transport",
            Self::PayloadShape => "payload_shape",
        }
    }
}

/// Failure to resolve a single placeholder.
///
/// None of these abort a document: each is rendered inline as an error
/// marker in place of the placeholder that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path expression could not be evaluated.
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    /// The parameter store has no parameter with this name.
    #[error("parameter {name} not found")]
    ParameterNotFound {
        /// Parameter name as sent to the store.
        name: String,
    },

    /// The secret store has no secret with this identifier.
    #[error("secret {id} not found")]
    SecretNotFound {
        /// Secret identifier as sent to the store.
        id: String,
    },

    /// The secret exists but carries no textual payload.
    #[error("secret {id} has no string value")]
    NoStringValue {
        /// Secret identifier.
        id: String,
    },

    /// A field was requested but the payload is not a flat JSON object of strings.
    #[error("secret {id} is not valid JSON: {reason}")]
    InvalidJson {
        /// Secret identifier.
        id: String,
        /// Parser message.
        reason: String,
    },

    /// The payload parsed but lacks the requested field.
    #[error("key {key} not found in secret {id}")]
    KeyNotFound {
        /// Requested field.
        key: String,
        /// Secret identifier.
        id: String,
    },

    /// The underlying provider call failed.
    #[error("{0}")]
    Transport(String),

    /// The provider call exceeded its deadline.
    #[error("provider call timed out after {timeout_ms}ms")]
    Timeout {
        /// Deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The caller cancelled the run while the call was pending.
    #[error("operation cancelled")]
    Cancelled,
}

impl ResolveError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Expression(_) => ErrorKind::Expression,
            Self::ParameterNotFound { .. }
            | Self::SecretNotFound { .. }
            | Self::KeyNotFound { .. } => ErrorKind::NotFound,
            Self::NoStringValue { .. } | Self::InvalidJson { .. } => ErrorKind::PayloadShape,
            Self::Transport(_) | Self::Timeout { .. } | Self::Cancelled => ErrorKind::Transport,
        }
    }
}

/// Result type alias for placeholder resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_match_provider_wording() {
        assert_eq!(
            ResolveError::ParameterNotFound { name: "missing".into() }.to_string(),
            "parameter missing not found"
        );
        assert_eq!(
            ResolveError::SecretNotFound { id: "notthere".into() }.to_string(),
            "secret notthere not found"
        );
        assert_eq!(
            ResolveError::NoStringValue { id: "id".into() }.to_string(),
            "secret id has no string value"
        );
        assert_eq!(
            ResolveError::KeyNotFound {
                key: "Password".into(),
                id: "/db".into()
            }
            .to_string(),
            "key Password not found in secret /db"
        );
    }

    #[test]
    fn test_expression_error_is_transparent() {
        let err = ResolveError::from(ExpressionError::Parse("unclosed action".into()));
        assert_eq!(err.to_string(), "template parse error: unclosed action");
        assert_eq!(err.kind(), ErrorKind::Expression);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ResolveError::InvalidJson {
                id: "x".into(),
                reason: "eof".into()
            }
            .kind(),
            ErrorKind::PayloadShape
        );
        assert_eq!(ResolveError::Cancelled.kind(), ErrorKind::Transport);
        assert_eq!(ResolveError::Timeout { timeout_ms: 10 }.kind(), ErrorKind::Transport);
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
    }
}
