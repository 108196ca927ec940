//! Usage-requirement markers: build/install interface selection,
//! export-time placeholders, and link-only content.

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::nodes::{logical, Arity, NodeDescriptor};

/// Evaluating a build-time requirement keeps the content; exporting
/// replaces this node with the install-side preprocessing instead.
pub static BUILD_INTERFACE: NodeDescriptor =
    NodeDescriptor::new(logical::eval_one).arbitrary_content();

/// The inverse of `BUILD_INTERFACE`: silent during build-time evaluation.
pub static INSTALL_INTERFACE: NodeDescriptor = NodeDescriptor::new(eval_install_interface)
    .no_content()
    .arbitrary_content();

pub static INSTALL_PREFIX: NodeDescriptor =
    NodeDescriptor::new(eval_install_prefix).arity(Arity::Exact(0));

pub static LINK_ONLY: NodeDescriptor = NodeDescriptor::new(eval_link_only);

pub static TARGET_NAME: NodeDescriptor = NodeDescriptor::new(eval_target_name)
    .literal_input()
    .arbitrary_content();

fn eval_install_interface(
    _parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    String::new()
}

fn eval_install_prefix(
    _parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    report_error(
        context,
        content.original_expression(),
        "INSTALL_PREFIX is a marker for install(EXPORT) only.  It should never be evaluated.",
    );
    String::new()
}

fn eval_link_only(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    dag: Option<&DagChecker<'_>>,
) -> String {
    // Private link dependency: invisible while propagating usage
    // requirements, literal otherwise.
    if dag.is_some_and(|d| d.transitive_properties_only()) {
        return String::new();
    }
    parameters[0].clone()
}

fn eval_target_name(
    parameters: &[String],
    _context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    parameters[0].clone()
}
