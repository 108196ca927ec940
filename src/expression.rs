//! A parsed expression ready for repeated evaluation.

use log::debug;

use crate::ast::Evaluator;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::eval::Evaluate;
use crate::parser;

/// The compiled form of one generator-expression string: the owned
/// evaluator tree plus the original text. Immutable once parsed, so a
/// host may share it across evaluations as long as each evaluation owns
/// its context.
#[derive(Debug)]
pub struct CompiledExpression {
    input: String,
    evaluators: Vec<Evaluator>,
}

impl CompiledExpression {
    /// Parsing never fails; malformed input stays literal text.
    pub fn parse(input: impl Into<String>) -> CompiledExpression {
        let input = input.into();
        let evaluators = parser::parse(&input);
        CompiledExpression { input, evaluators }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input contained any generator expression at all.
    /// Plain text never needs a context and can skip evaluation.
    pub fn needs_evaluation(&self) -> bool {
        self.evaluators.iter().any(|e| !e.is_text())
    }

    /// Evaluates against the caller-owned context. Fatal errors leave
    /// `context.had_error` set and yield the empty string; the flags and
    /// side-effect sets on the context describe what the result depends
    /// on.
    pub fn evaluate(
        &self,
        context: &mut EvaluationContext<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> String {
        debug!("evaluating generator expression: {}", self.input);
        let mut output = String::new();
        for evaluator in &self.evaluators {
            output.push_str(&evaluator.evaluate(context, dag));
            if context.had_error {
                return String::new();
            }
        }
        output
    }
}
