//! Path expression evaluator
//!
//! A path expression is literal text with optional `{{ ... }}` actions. Each
//! action is a pipeline of single-word commands separated by `|`; the value
//! produced by one command is passed as the argument of the next.
//!
//! Commands:
//! - `env`: the environment name (takes no argument)
//! - `.Env`: the `Env` field of the context (takes no argument)
//! - `toLower`: lower-cases its argument (takes exactly one argument)

use tplr_domain::{EvalContext, ExpressionError};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A parsed path expression, ready to be executed against a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Action(Pipeline),
}

/// Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pipeline {
    commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Function(Function),
    Field(String),
}

/// Functions callable inside an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Returns the environment name.
    Env,
    /// Lower-cases its argument.
    ToLower,
}

impl Function {
    /// Every defined function.
    pub const ALL: [Self; 2] = [Self::Env, Self::ToLower];

    /// Name as written in an expression.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::ToLower => "toLower",
        }
    }

    /// Number of arguments the function expects.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Env => 0,
            Self::ToLower => 1,
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    fn call(self, context: &EvalContext, piped: Option<String>) -> Result<String, ExpressionError> {
        match (self, piped) {
            (Self::Env, None) => Ok(context.env.clone()),
            (Self::ToLower, Some(argument)) => Ok(argument.to_lowercase()),
            (function, piped) => Err(ExpressionError::Execution(format!(
                "wrong number of args for {}: want {} got {}",
                function.name(),
                function.arity(),
                usize::from(piped.is_some())
            ))),
        }
    }
}

impl PathTemplate {
    /// Parses a path expression.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::Parse`] for an unclosed action, an empty
    /// action or pipeline stage, an unknown function, or a malformed command.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let body_and_rest = &rest[start + OPEN.len()..];
            let end = body_and_rest
                .find(CLOSE)
                .ok_or_else(|| ExpressionError::Parse("unclosed action".to_string()))?;
            segments.push(Segment::Action(Pipeline::parse(&body_and_rest[..end])?));
            rest = &body_and_rest[end + CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Evaluates the expression against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::Execution`] when a function receives the
    /// wrong number of arguments, a field is given an argument, or a field
    /// does not exist on the context.
    pub fn execute(&self, context: &EvalContext) -> Result<String, ExpressionError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Action(pipeline) => output.push_str(&pipeline.execute(context)?),
            }
        }
        Ok(output)
    }
}

impl Pipeline {
    fn parse(body: &str) -> Result<Self, ExpressionError> {
        if body.trim().is_empty() {
            return Err(ExpressionError::Parse("missing value for command".to_string()));
        }
        let commands = body
            .split('|')
            .map(Command::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { commands })
    }

    fn execute(&self, context: &EvalContext) -> Result<String, ExpressionError> {
        self.commands
            .iter()
            .try_fold(None, |piped, command| command.execute(context, piped).map(Some))
            .map(Option::unwrap_or_default)
    }
}

impl Command {
    fn parse(raw: &str) -> Result<Self, ExpressionError> {
        let mut words = raw.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ExpressionError::Parse("missing command in pipeline".to_string()));
        };
        if let Some(extra) = words.next() {
            return Err(ExpressionError::Parse(format!(
                "unexpected {extra:?} after {word:?}"
            )));
        }

        if let Some(field) = word.strip_prefix('.') {
            return if is_identifier(field) {
                Ok(Self::Field(field.to_string()))
            } else {
                Err(ExpressionError::Parse(format!("bad field name {word:?}")))
            };
        }

        if !is_identifier(word) {
            return Err(ExpressionError::Parse(format!("unexpected {word:?} in command")));
        }

        Function::lookup(word)
            .map(Self::Function)
            .ok_or_else(|| ExpressionError::Parse(format!("function {word:?} not defined")))
    }

    fn execute(
        &self,
        context: &EvalContext,
        piped: Option<String>,
    ) -> Result<String, ExpressionError> {
        match self {
            Self::Function(function) => function.call(context, piped),
            Self::Field(name) => {
                if piped.is_some() {
                    return Err(ExpressionError::Execution(format!(
                        "can't give argument to non-function .{name}"
                    )));
                }
                context
                    .field(name)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ExpressionError::Execution(format!("can't evaluate field {name}"))
                    })
            }
        }
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Parses and evaluates a path expression in one step.
///
/// # Examples
///
/// ```
/// use tplr_application::template::evaluate;
/// use tplr_domain::EvalContext;
///
/// let path = evaluate("/app/{{env | toLower}}/db", &EvalContext::new("DEV"));
/// assert_eq!(path.unwrap(), "/app/dev/db");
/// ```
///
/// # Errors
///
/// See [`PathTemplate::parse`] and [`PathTemplate::execute`].
pub fn evaluate(source: &str, context: &EvalContext) -> Result<String, ExpressionError> {
    PathTemplate::parse(source)?.execute(context)
}
