//! Interface markers and LINK_ONLY.

use pretty_assertions::assert_eq;

use crate::dag::DagChecker;
use crate::diagnostics::Backtrace;
use crate::tests::evaluate;
use crate::tests::mock::MockBuildContext;
use crate::tests::{evaluate_under_dag, evaluate_with};

#[test]
fn build_interface_keeps_content() {
    assert_eq!(evaluate("$<BUILD_INTERFACE:/src/include>").output, "/src/include");
    assert_eq!(
        evaluate("$<BUILD_INTERFACE:a,b;c>").output,
        "a,b;c"
    );
}

#[test]
fn install_interface_is_empty_during_build_evaluation() {
    assert_eq!(evaluate("$<INSTALL_INTERFACE:include>").output, "");
}

#[test]
fn install_interface_still_requires_a_parameter() {
    let result = evaluate("$<INSTALL_INTERFACE>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("$<INSTALL_INTERFACE> expression requires a parameter.")
    );
}

#[test]
fn install_prefix_must_not_be_evaluated() {
    let result = evaluate("$<INSTALL_PREFIX>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some(
            "INSTALL_PREFIX is a marker for install(EXPORT) only.  It should never \
             be evaluated."
        )
    );
}

#[test]
fn link_only_without_dag_keeps_content() {
    assert_eq!(evaluate("$<LINK_ONLY:pthread>").output, "pthread");
}

#[test]
fn link_only_visible_while_linking() {
    let build = MockBuildContext::new();
    let dag = DagChecker::new(Backtrace::new(), "app", "LINK_LIBRARIES", None);
    let result = evaluate_under_dag(&build, "Debug", None, "$<LINK_ONLY:pthread>", &dag);
    assert_eq!(result.output, "pthread");
}

#[test]
fn link_only_empty_while_propagating_usage_requirements() {
    let build = MockBuildContext::new();
    let mut dag = DagChecker::new(Backtrace::new(), "app", "INTERFACE_LINK_LIBRARIES", None);
    dag.set_transitive_properties_only(true);
    let result = evaluate_under_dag(&build, "Debug", None, "$<LINK_ONLY:pthread>", &dag);
    assert_eq!(result.output, "");
    assert!(!result.had_error);
}

#[test]
fn markers_compose_with_other_expressions() {
    let build = MockBuildContext::new();
    let result = evaluate_with(
        &build,
        "Debug",
        None,
        "$<BUILD_INTERFACE:$<1:kept>>$<INSTALL_INTERFACE:dropped>",
    );
    assert_eq!(result.output, "kept");
}
