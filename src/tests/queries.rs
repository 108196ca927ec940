//! Compiler, platform, and config query nodes.

use pretty_assertions::assert_eq;

use crate::diagnostics::MessageKind;
use crate::policy::{PolicyId, PolicyStatus};
use crate::tests::mock::{MockBuildContext, MockTarget};
use crate::tests::evaluate_with;

fn toolchain() -> MockBuildContext {
    MockBuildContext::new()
        .definition("CMAKE_C_COMPILER_ID", "GNU")
        .definition("CMAKE_CXX_COMPILER_ID", "Clang")
        .definition("CMAKE_C_COMPILER_VERSION", "4.9.2")
        .definition("CMAKE_CXX_COMPILER_VERSION", "3.6")
        .definition("CMAKE_SYSTEM_NAME", "Linux")
        .target(MockTarget::executable("app"))
}

#[test]
fn compiler_id_without_parameter_returns_id() {
    let build = toolchain();
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID>").output,
        "GNU"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<CXX_COMPILER_ID>").output,
        "Clang"
    );
}

#[test]
fn compiler_id_matches_case_sensitively() {
    let build = toolchain();
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:GNU>").output,
        "1"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:MSVC>").output,
        "0"
    );
}

#[test]
fn compiler_id_requires_head_target() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", None, "$<C_COMPILER_ID>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some(
            "$<C_COMPILER_ID> may only be used with binary targets.  It may not be \
             used with add_custom_command or add_custom_target."
        )
    );
}

#[test]
fn compiler_id_case_mismatch_under_new_policy_is_false() {
    let build = toolchain().policy(PolicyId::Cmp0044, PolicyStatus::New);
    let result = evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:gnu>");
    assert_eq!(result.output, "0");
    assert!(result.messages.is_empty());
}

#[test]
fn compiler_id_case_mismatch_under_old_policy_is_true() {
    let build = toolchain().policy(PolicyId::Cmp0044, PolicyStatus::Old);
    let result = evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:gnu>");
    assert_eq!(result.output, "1");
    assert!(result.messages.is_empty());
}

#[test]
fn compiler_id_case_mismatch_warns_then_matches() {
    let build = toolchain().policy(PolicyId::Cmp0044, PolicyStatus::Warn);
    let result = evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:gnu>");
    assert_eq!(result.output, "1");
    assert_eq!(result.messages.len(), 1);
    let (kind, text) = &result.messages[0];
    assert_eq!(*kind, MessageKind::AuthorWarning);
    assert!(text.contains("CMP0044"));
}

#[test]
fn compiler_id_validates_parameter_syntax() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_ID:not ok>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("Expression syntax not recognized.")
    );
}

#[test]
fn compiler_version_queries() {
    let build = toolchain();
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_VERSION>").output,
        "4.9.2"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_VERSION:4.9.2>").output,
        "1"
    );
    // Version comparison, not string comparison.
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<CXX_COMPILER_VERSION:3.6.0>").output,
        "1"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_VERSION:4.10>").output,
        "0"
    );
}

#[test]
fn compiler_version_rejects_non_version_parameter() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", Some("app"), "$<C_COMPILER_VERSION:4x>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("Expression syntax not recognized.")
    );
}

#[test]
fn platform_id_works_without_head_target() {
    let build = toolchain();
    assert_eq!(evaluate_with(&build, "Debug", None, "$<PLATFORM_ID>").output, "Linux");
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<PLATFORM_ID:Linux>").output,
        "1"
    );
    // Case sensitive, no policy escape hatch.
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<PLATFORM_ID:linux>").output,
        "0"
    );
}

#[test]
fn configuration_returns_config_and_marks_sensitive() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", None, "$<CONFIGURATION>");
    assert_eq!(result.output, "Debug");
    assert!(result.context_sensitive);
}

#[test]
fn config_without_parameter_behaves_like_configuration() {
    let build = toolchain();
    let result = evaluate_with(&build, "Release", None, "$<CONFIG>");
    assert_eq!(result.output, "Release");
    assert!(result.context_sensitive);
}

#[test]
fn config_test_is_case_insensitive() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", None, "$<CONFIG:DEBUG>");
    assert_eq!(result.output, "1");
    assert!(result.context_sensitive);
    assert_eq!(evaluate_with(&build, "Debug", None, "$<CONFIG:Release>").output, "0");
}

#[test]
fn config_test_with_empty_config() {
    let build = toolchain();
    assert_eq!(evaluate_with(&build, "", None, "$<CONFIG:>").output, "1");
    assert_eq!(evaluate_with(&build, "", None, "$<CONFIG:Debug>").output, "0");
}

#[test]
fn config_test_consults_imported_config_mapping() {
    let build = MockBuildContext::new().target(
        MockTarget::shared_library("dep")
            .imported()
            .prop("MAP_IMPORTED_CONFIG_DEBUG", "RelWithDebInfo;Release"),
    );
    let result = evaluate_with(&build, "Debug", Some("dep"), "$<CONFIG:Release>");
    assert_eq!(result.output, "1");
    assert!(result.context_sensitive);

    let result = evaluate_with(&build, "Debug", Some("dep"), "$<CONFIG:MinSizeRel>");
    assert_eq!(result.output, "0");
}

#[test]
fn config_mapping_ignored_for_non_imported_targets() {
    let build = MockBuildContext::new().target(
        MockTarget::shared_library("dep").prop("MAP_IMPORTED_CONFIG_DEBUG", "Release"),
    );
    assert_eq!(
        evaluate_with(&build, "Debug", Some("dep"), "$<CONFIG:Release>").output,
        "0"
    );
}

#[test]
fn config_validates_parameter_syntax() {
    let build = toolchain();
    let result = evaluate_with(&build, "Debug", None, "$<CONFIG:Debug Mode>");
    assert!(result.had_error);
}
