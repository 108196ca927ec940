//! Boolean logic, comparisons, and numeric/version tests.

use std::cmp::Ordering;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::nodes::{Arity, NodeDescriptor};
use crate::utils::{is_off, list_elements, parse_integer, version_compare};

pub static ZERO: NodeDescriptor = NodeDescriptor::new(eval_zero)
    .no_content()
    .arbitrary_content();

pub static ONE: NodeDescriptor = NodeDescriptor::new(eval_one).arbitrary_content();

pub static AND: NodeDescriptor = NodeDescriptor::new(eval_and).arity(Arity::OneOrMore);
pub static OR: NodeDescriptor = NodeDescriptor::new(eval_or).arity(Arity::OneOrMore);
pub static NOT: NodeDescriptor = NodeDescriptor::new(eval_not);
pub static BOOL: NodeDescriptor = NodeDescriptor::new(eval_bool);
pub static IF: NodeDescriptor = NodeDescriptor::new(eval_if).arity(Arity::Exact(3));
pub static STREQUAL: NodeDescriptor = NodeDescriptor::new(eval_strequal).arity(Arity::Exact(2));
pub static EQUAL: NodeDescriptor = NodeDescriptor::new(eval_equal).arity(Arity::Exact(2));
pub static IN_LIST: NodeDescriptor = NodeDescriptor::new(eval_in_list).arity(Arity::Exact(2));

pub static VERSION_LESS: NodeDescriptor =
    NodeDescriptor::new(eval_version_less).arity(Arity::Exact(2));
pub static VERSION_GREATER: NodeDescriptor =
    NodeDescriptor::new(eval_version_greater).arity(Arity::Exact(2));
pub static VERSION_EQUAL: NodeDescriptor =
    NodeDescriptor::new(eval_version_equal).arity(Arity::Exact(2));
pub static VERSION_LESS_EQUAL: NodeDescriptor =
    NodeDescriptor::new(eval_version_less_equal).arity(Arity::Exact(2));
pub static VERSION_GREATER_EQUAL: NodeDescriptor =
    NodeDescriptor::new(eval_version_greater_equal).arity(Arity::Exact(2));

fn eval_zero(
    _parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    String::new()
}

pub(crate) fn eval_one(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    parameters[0].clone()
}

fn boolean_op(
    op: &str,
    success: &str,
    failure: &str,
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
) -> String {
    for parameter in parameters {
        if parameter == failure {
            return failure.to_owned();
        }
        if parameter != success {
            report_error(
                context,
                content.original_expression(),
                &format!("Parameters to $<{op}> must resolve to either '0' or '1'."),
            );
            return String::new();
        }
    }
    success.to_owned()
}

fn eval_and(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    boolean_op("AND", "1", "0", parameters, context, content)
}

fn eval_or(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    boolean_op("OR", "0", "1", parameters, context, content)
}

fn eval_not(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    match parameters[0].as_str() {
        "0" => "1".to_owned(),
        "1" => "0".to_owned(),
        _ => {
            report_error(
                context,
                content.original_expression(),
                "$<NOT> parameter must resolve to exactly one '0' or '1' value.",
            );
            String::new()
        }
    }
}

fn eval_bool(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    if is_off(&parameters[0]) { "0" } else { "1" }.to_owned()
}

fn eval_if(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    match parameters[0].as_str() {
        "1" => parameters[1].clone(),
        "0" => parameters[2].clone(),
        _ => {
            report_error(
                context,
                content.original_expression(),
                "First parameter to $<IF> must resolve to exactly one '0' or '1' value.",
            );
            String::new()
        }
    }
}

fn eval_strequal(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    if parameters[0] == parameters[1] { "1" } else { "0" }.to_owned()
}

fn eval_equal(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    let mut numbers = [0i64; 2];
    for (i, parameter) in parameters.iter().enumerate() {
        match parse_integer(parameter) {
            Some(value) => numbers[i] = value,
            None => {
                report_error(
                    context,
                    content.original_expression(),
                    &format!("$<EQUAL> parameter {parameter} is not a valid integer."),
                );
                return String::new();
            }
        }
    }
    if numbers[0] == numbers[1] { "1" } else { "0" }.to_owned()
}

fn eval_in_list(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    let found = list_elements(&parameters[1])
        .iter()
        .any(|element| *element == parameters[0]);
    if found { "1" } else { "0" }.to_owned()
}

fn version_test(parameters: &[String], accept: fn(Ordering) -> bool) -> String {
    let ordering = version_compare(&parameters[0], &parameters[1]);
    if accept(ordering) { "1" } else { "0" }.to_owned()
}

fn eval_version_less(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    version_test(parameters, Ordering::is_lt)
}

fn eval_version_greater(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    version_test(parameters, Ordering::is_gt)
}

fn eval_version_equal(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    version_test(parameters, Ordering::is_eq)
}

fn eval_version_less_equal(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    version_test(parameters, Ordering::is_le)
}

fn eval_version_greater_equal(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    version_test(parameters, Ordering::is_ge)
}
