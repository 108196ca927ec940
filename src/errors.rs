use thiserror::Error;

/// Structural errors raised by the evaluation driver before an operator
/// ever runs. Operator-specific failures (bad integers, missing targets,
/// forbidden contexts) are reported at their call sites with the same
/// reporting channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Expression did not evaluate to a known generator expression")]
    UnknownExpression,

    #[error("$<{0}> expression requires no parameters.")]
    ParametersNotAllowed(String),

    #[error("$<{0}> expression requires exactly one parameter.")]
    ExactlyOneParameter(String),

    #[error("$<{identifier}> expression requires {expected} comma separated parameters, but got {got} instead.")]
    ParameterCount {
        identifier: String,
        expected: usize,
        got: usize,
    },

    #[error("$<{0}> expression requires at least one parameter.")]
    AtLeastOneParameter(String),

    #[error("$<{0}> expression requires one or zero parameters.")]
    OneOrZeroParameters(String),

    #[error("$<{0}> expression requires a parameter.")]
    MissingParameter(String),

    #[error("$<{0}> expression requires literal input.")]
    LiteralInputRequired(String),
}
