//! Evaluation context for path expressions

/// Values visible to a path expression.
///
/// The context has exactly one field: the environment name, reachable as
/// `env` or `.Env` inside an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Environment name supplied by the caller (e.g. `DEV`).
    pub env: String,
}

impl EvalContext {
    /// Creates a context for the given environment name.
    #[must_use]
    pub fn new(env: impl Into<String>) -> Self {
        Self { env: env.into() }
    }

    /// Looks up a context field by its exported name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Env" => Some(&self.env),
            _ => None,
        }
    }
}
