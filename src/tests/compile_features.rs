//! `$<COMPILE_FEATURES:...>` availability tests and standard recording.

use pretty_assertions::assert_eq;

use crate::dag::DagChecker;
use crate::diagnostics::Backtrace;
use crate::tests::mock::{MockBuildContext, MockTarget};
use crate::tests::{evaluate_under_dag, evaluate_with};

fn project() -> MockBuildContext {
    MockBuildContext::new()
        .target(MockTarget::executable("app"))
        .feature("CXX", "cxx_auto_type", true)
        .feature("CXX", "cxx_variadic_templates", false)
        .feature("C", "c_static_assert", true)
        .definition("CMAKE_CXX_STANDARD_DEFAULT", "98")
}

#[test]
fn requires_head_target() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<COMPILE_FEATURES:cxx_auto_type>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some(
            "$<COMPILE_FEATURE> may only be used with binary targets.  It may not \
             be used with add_custom_command or add_custom_target."
        )
    );
}

#[test]
fn available_features_are_true() {
    let build = project();
    let result = evaluate_with(
        &build,
        "Debug",
        Some("app"),
        "$<COMPILE_FEATURES:cxx_auto_type,c_static_assert>",
    );
    assert_eq!(result.output, "1");
    assert!(!result.had_error);
}

#[test]
fn unavailable_feature_is_false() {
    let build = project();
    let result = evaluate_with(
        &build,
        "Debug",
        Some("app"),
        "$<COMPILE_FEATURES:cxx_auto_type,cxx_variadic_templates>",
    );
    assert_eq!(result.output, "0");
    assert!(!result.had_error);
}

#[test]
fn unknown_feature_is_fatal() {
    let build = project();
    let result = evaluate_with(&build, "Debug", Some("app"), "$<COMPILE_FEATURES:cxx_nope>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("Unknown compile feature \"cxx_nope\".")
    );
}

#[test]
fn link_libraries_mode_records_standard_and_succeeds() {
    let build = project();
    let dag = DagChecker::new(Backtrace::new(), "consumer", "LINK_LIBRARIES", None);
    let result = evaluate_under_dag(
        &build,
        "Debug",
        Some("app"),
        "$<COMPILE_FEATURES:cxx_variadic_templates>",
        &dag,
    );
    assert_eq!(result.output, "1");
    assert_eq!(
        result.max_language_standard,
        vec![("app".to_string(), "CXX".to_string(), "98".to_string())]
    );
}

#[test]
fn link_libraries_mode_prefers_target_standard_property() {
    let build = MockBuildContext::new()
        .target(MockTarget::executable("app").prop("CXX_STANDARD", "11"))
        .feature("CXX", "cxx_variadic_templates", false)
        .definition("CMAKE_CXX_STANDARD_DEFAULT", "98");
    let dag = DagChecker::new(Backtrace::new(), "consumer", "LINK_LIBRARIES", None);
    let result = evaluate_under_dag(
        &build,
        "Debug",
        Some("app"),
        "$<COMPILE_FEATURES:cxx_variadic_templates>",
        &dag,
    );
    assert_eq!(result.output, "1");
    assert_eq!(
        result.max_language_standard,
        vec![("app".to_string(), "CXX".to_string(), "11".to_string())]
    );
}
