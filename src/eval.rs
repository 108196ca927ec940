//! The evaluation driver: resolves a compound node's identifier through
//! the registry, evaluates its parameters under the node's arity and
//! content rules, and invokes the operator.

use crate::ast::{Content, Evaluator};
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::errors::ExpressionError;
use crate::nodes::{lookup, Arity, NodeDescriptor};

pub trait Evaluate {
    fn evaluate(&self, context: &mut EvaluationContext<'_>, dag: Option<&DagChecker<'_>>)
        -> String;
}

impl Evaluate for Evaluator {
    fn evaluate(
        &self,
        context: &mut EvaluationContext<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> String {
        match self {
            Evaluator::Text(text) => text.clone(),
            Evaluator::Content(content) => content.evaluate(context, dag),
        }
    }
}

impl Evaluate for Content {
    fn evaluate(
        &self,
        context: &mut EvaluationContext<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> String {
        let mut identifier = String::new();
        for child in &self.identifier_children {
            identifier.push_str(&child.evaluate(context, dag));
            if context.had_error {
                return String::new();
            }
        }

        let Some(node) = lookup(&identifier) else {
            report_error(
                context,
                self.original_expression(),
                &ExpressionError::UnknownExpression.to_string(),
            );
            return String::new();
        };

        if !node.generates_content {
            if node.arity == Arity::Exact(1) && node.accepts_arbitrary_content {
                if self.param_children.is_empty() {
                    report_error(
                        context,
                        self.original_expression(),
                        &ExpressionError::MissingParameter(identifier).to_string(),
                    );
                }
            } else {
                // Still evaluate so arity and literal errors surface.
                evaluate_parameters(self, node, &identifier, context, dag);
            }
            return String::new();
        }

        let parameters = evaluate_parameters(self, node, &identifier, context, dag);
        if context.had_error {
            return String::new();
        }

        (node.eval)(&parameters, context, self, dag)
    }
}

fn evaluate_parameters(
    content: &Content,
    node: &NodeDescriptor,
    identifier: &str,
    context: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> Vec<String> {
    let mut parameters = Vec::new();

    for (index, param) in content.param_children.iter().enumerate() {
        if node.accepts_arbitrary_content && Arity::Exact(index + 1) == node.arity {
            // The final declared parameter swallows everything left,
            // re-joining the original comma boundaries literally.
            let last = arbitrary_content(content, node, identifier, context, dag, index);
            parameters.push(last);
            return parameters;
        }

        let mut parameter = String::new();
        for child in param {
            parameter.push_str(&child.evaluate(context, dag));
            if context.had_error {
                return parameters;
            }
        }
        parameters.push(parameter);
    }

    let error = match node.arity {
        Arity::Exact(0) if !parameters.is_empty() => {
            Some(ExpressionError::ParametersNotAllowed(identifier.to_owned()))
        }
        Arity::Exact(1) if parameters.len() != 1 => {
            Some(ExpressionError::ExactlyOneParameter(identifier.to_owned()))
        }
        Arity::Exact(expected) if parameters.len() != expected => {
            Some(ExpressionError::ParameterCount {
                identifier: identifier.to_owned(),
                expected,
                got: parameters.len(),
            })
        }
        Arity::OneOrMore if parameters.is_empty() => {
            Some(ExpressionError::AtLeastOneParameter(identifier.to_owned()))
        }
        Arity::OneOrZero if parameters.len() > 1 => {
            Some(ExpressionError::OneOrZeroParameters(identifier.to_owned()))
        }
        _ => None,
    };
    if let Some(error) = error {
        report_error(context, content.original_expression(), &error.to_string());
    }

    parameters
}

/// Evaluates the parameter children from `start` on as one verbatim
/// parameter, restoring the commas the parser split on.
fn arbitrary_content(
    content: &Content,
    node: &NodeDescriptor,
    identifier: &str,
    context: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
    start: usize,
) -> String {
    let remaining = &content.param_children[start..];
    let mut result = String::new();
    for (index, param) in remaining.iter().enumerate() {
        for child in param {
            if node.requires_literal_input && !child.is_text() {
                report_error(
                    context,
                    content.original_expression(),
                    &ExpressionError::LiteralInputRequired(identifier.to_owned()).to_string(),
                );
                return String::new();
            }
            result.push_str(&child.evaluate(context, dag));
            if context.had_error {
                return String::new();
            }
        }
        if index + 1 != remaining.len() {
            result.push(',');
        }
    }
    result
}
