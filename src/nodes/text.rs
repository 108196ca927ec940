//! Case mapping, identifier mangling, list joining, and the literal
//! separator escapes.

use itertools::Itertools;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::nodes::{Arity, NodeDescriptor};
use crate::utils::{expand_list, make_c_identifier};

pub static LOWER_CASE: NodeDescriptor = NodeDescriptor::new(eval_lower_case).arbitrary_content();
pub static UPPER_CASE: NodeDescriptor = NodeDescriptor::new(eval_upper_case).arbitrary_content();
pub static MAKE_C_IDENTIFIER: NodeDescriptor =
    NodeDescriptor::new(eval_make_c_identifier).arbitrary_content();

pub static ANGLE_R: NodeDescriptor = NodeDescriptor::new(eval_angle_r).arity(Arity::Exact(0));
pub static COMMA: NodeDescriptor = NodeDescriptor::new(eval_comma).arity(Arity::Exact(0));
pub static SEMICOLON: NodeDescriptor = NodeDescriptor::new(eval_semicolon).arity(Arity::Exact(0));

pub static JOIN: NodeDescriptor = NodeDescriptor::new(eval_join)
    .arity(Arity::Exact(2))
    .arbitrary_content();

fn eval_lower_case(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    parameters[0].to_ascii_lowercase()
}

fn eval_upper_case(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    parameters[0].to_ascii_uppercase()
}

fn eval_make_c_identifier(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    make_c_identifier(&parameters[0])
}

fn eval_angle_r(
    _parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    ">".to_owned()
}

fn eval_comma(
    _parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    ",".to_owned()
}

fn eval_semicolon(
    _parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    ";".to_owned()
}

fn eval_join(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    expand_list(&parameters[0]).iter().join(&parameters[1])
}
