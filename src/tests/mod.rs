
mod artifact;
mod compile_features;
mod interface;
mod queries;

use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::MessageKind;
use crate::host::BuildContext;
use crate::expression::CompiledExpression;
use crate::tests::mock::MockBuildContext;

pub(crate) struct EvalOutcome {
    pub output: String,
    pub had_error: bool,
    pub context_sensitive: bool,
    pub all_targets: Vec<String>,
    pub depend_targets: Vec<String>,
    pub seen_target_properties: Vec<String>,
    pub max_language_standard: Vec<(String, String, String)>,
    pub messages: Vec<(MessageKind, String)>,
}

impl EvalOutcome {
    /// The reason line of the first fatal error, without the standard
    /// two-line preamble.
    pub fn first_error_reason(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|(kind, _)| *kind == MessageKind::FatalError)
            .and_then(|(_, text)| text.splitn(3, '\n').nth(2))
    }
}

pub(crate) fn finish(
    build: &MockBuildContext,
    context: EvaluationContext<'_>,
    output: String,
) -> EvalOutcome {
    EvalOutcome {
        output,
        had_error: context.had_error,
        context_sensitive: context.had_context_sensitive_condition,
        all_targets: context.all_targets.iter().cloned().collect(),
        depend_targets: context.depend_targets.iter().cloned().collect(),
        seen_target_properties: context.seen_target_properties.iter().cloned().collect(),
        max_language_standard: context
            .max_language_standard
            .iter()
            .map(|((target, lang), standard)| (target.clone(), lang.clone(), standard.clone()))
            .collect(),
        messages: build.take_messages(),
    }
}

/// Evaluates `expr` against `build` with the given config and head
/// target (which also becomes the current target, as when a binary
/// target evaluates its own requirements).
pub(crate) fn evaluate_with(
    build: &MockBuildContext,
    config: &str,
    head: Option<&str>,
    expr: &str,
) -> EvalOutcome {
    let compiled = CompiledExpression::parse(expr);
    let mut context =
        EvaluationContext::new(build, config).with_target(head.and_then(|h| build.find_target(h)));
    let output = compiled.evaluate(&mut context, None);
    finish(build, context, output)
}

/// Like `evaluate_with`, but under an existing DAG frame, as when the
/// host evaluates the link libraries or sources of a target.
pub(crate) fn evaluate_under_dag(
    build: &MockBuildContext,
    config: &str,
    head: Option<&str>,
    expr: &str,
    dag: &DagChecker<'_>,
) -> EvalOutcome {
    let compiled = CompiledExpression::parse(expr);
    let mut context =
        EvaluationContext::new(build, config).with_target(head.and_then(|h| build.find_target(h)));
    let output = compiled.evaluate(&mut context, Some(dag));
    finish(build, context, output)
}

/// Shorthand for expressions that need no target or definitions.
pub(crate) fn evaluate(expr: &str) -> EvalOutcome {
    let build = MockBuildContext::new();
    evaluate_with(&build, "Debug", None, expr)
}
