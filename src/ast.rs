//! The evaluator tree a parsed expression compiles to: literal text
//! leaves interleaved with compound `$<...>` nodes. The tree is built
//! once by the parser, owned by the compiled expression, and immutable
//! during evaluation.

/// One evaluator in a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluator {
    /// A literal run of text.
    Text(String),
    /// A compound `$<IDENT:param,param,...>` expression.
    Content(Box<Content>),
}

impl Evaluator {
    pub fn text(text: impl Into<String>) -> Evaluator {
        Evaluator::Text(text.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Evaluator::Text(_))
    }
}

/// A compound expression node.
///
/// The identifier children concatenate to the operator name (the
/// identifier itself may be computed, as in `$<$<CONFIG:Debug>:...>`).
/// Each parameter is itself a sequence of evaluators; the outer sequence
/// follows the comma-separated parameter boundaries of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub identifier_children: Vec<Evaluator>,
    pub param_children: Vec<Vec<Evaluator>>,
    original: String,
}

impl Content {
    pub fn new(
        original: impl Into<String>,
        identifier_children: Vec<Evaluator>,
        param_children: Vec<Vec<Evaluator>>,
    ) -> Content {
        Content {
            identifier_children,
            param_children,
            original: original.into(),
        }
    }

    /// The source text of this expression, used verbatim in error
    /// messages.
    pub fn original_expression(&self) -> &str {
        &self.original
    }
}
