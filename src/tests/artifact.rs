//! The TARGET_FILE / TARGET_LINKER_FILE / TARGET_SONAME_FILE family.

use pretty_assertions::assert_eq;

use crate::dag::DagChecker;
use crate::diagnostics::Backtrace;
use crate::tests::mock::{MockBuildContext, MockTarget};
use crate::tests::{evaluate_under_dag, evaluate_with};

fn project() -> MockBuildContext {
    MockBuildContext::new()
        .target(MockTarget::executable("app").artifact("/prj/out/app"))
        .target(
            MockTarget::shared_library("shared")
                .artifact("/prj/out/libshared.so.1.2")
                .with_soname("libshared.so.1")
                .output_dir("/prj/out"),
        )
        .target(
            MockTarget::shared_library("dll")
                .dll_platform()
                .with_import_library()
                .artifact("/prj/out/dll.dll")
                .import_artifact("/prj/out/dll.lib"),
        )
        .target(MockTarget::static_library("archive").artifact("/prj/out/libarchive.a"))
        .target(MockTarget::new("iface", crate::host::TargetType::InterfaceLibrary))
}

#[test]
fn target_file_returns_full_path() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_FILE:app>");
    assert_eq!(result.output, "/prj/out/app");
    assert_eq!(result.depend_targets, vec!["app".to_string()]);
    assert_eq!(result.all_targets, vec!["app".to_string()]);
}

#[test]
fn target_file_name_and_dir() {
    let build = project();
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_FILE_NAME:shared>").output,
        "libshared.so.1.2"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_FILE_DIR:shared>").output,
        "/prj/out"
    );
}

#[test]
fn linker_file_uses_import_library_when_present() {
    let build = project();
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_LINKER_FILE:dll>").output,
        "/prj/out/dll.lib"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_LINKER_FILE:shared>").output,
        "/prj/out/libshared.so.1.2"
    );
}

#[test]
fn linker_file_requires_linkable_target() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_LINKER_FILE:app>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some(
            "TARGET_LINKER_FILE is allowed only for libraries and executables with \
             ENABLE_EXPORTS."
        )
    );
}

#[test]
fn linker_file_allows_exporting_executable() {
    let build = MockBuildContext::new()
        .target(MockTarget::executable("exp").linkable(true).artifact("/prj/out/exp"));
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_LINKER_FILE:exp>").output,
        "/prj/out/exp"
    );
}

#[test]
fn soname_file_and_parts() {
    let build = project();
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_SONAME_FILE:shared>").output,
        "/prj/out/libshared.so.1"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_SONAME_FILE_NAME:shared>").output,
        "libshared.so.1"
    );
    assert_eq!(
        evaluate_with(&build, "Debug", None, "$<TARGET_SONAME_FILE_DIR:shared>").output,
        "/prj/out"
    );
}

#[test]
fn soname_file_rejected_on_dll_platforms() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_SONAME_FILE:dll>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("TARGET_SONAME_FILE is not allowed for DLL target platforms.")
    );
}

#[test]
fn soname_file_requires_shared_library() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_SONAME_FILE:archive>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("TARGET_SONAME_FILE is allowed only for SHARED libraries.")
    );
}

#[test]
fn unknown_target_is_fatal() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_FILE:ghost>");
    assert!(result.had_error);
    assert_eq!(result.first_error_reason(), Some("No target \"ghost\""));
}

#[test]
fn invalid_target_name_is_fatal() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_FILE:not/a/name>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("Expression syntax not recognized.")
    );
}

#[test]
fn non_binary_target_is_fatal() {
    let build = project();
    let result = evaluate_with(&build, "Debug", None, "$<TARGET_FILE:iface>");
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some("Target \"iface\" is not an executable or library.")
    );
}

#[test]
fn artifact_of_link_library_under_evaluation_is_fatal() {
    let build = project();
    let dag = DagChecker::new(Backtrace::new(), "shared", "LINK_LIBRARIES", None);
    let result = evaluate_under_dag(&build, "Debug", Some("app"), "$<TARGET_FILE:shared>", &dag);
    assert!(result.had_error);
    assert_eq!(
        result.first_error_reason(),
        Some(
            "Expressions which require the linker language may not be used while \
             evaluating link libraries"
        )
    );
}

#[test]
fn artifact_of_other_target_during_link_evaluation_is_fine() {
    let build = project();
    let dag = DagChecker::new(Backtrace::new(), "app", "LINK_LIBRARIES", None);
    let result = evaluate_under_dag(&build, "Debug", Some("app"), "$<TARGET_FILE:shared>", &dag);
    assert!(!result.had_error);
    assert_eq!(result.output, "/prj/out/libshared.so.1.2");
}

#[test]
fn artifact_of_sources_top_target_is_fatal() {
    let build = project();
    let dag = DagChecker::new(Backtrace::new(), "app", "SOURCES", None);
    let result = evaluate_under_dag(&build, "Debug", Some("app"), "$<TARGET_FILE:app>", &dag);
    assert!(result.had_error);
}
