//! Host-facing interfaces.
//!
//! The engine is pure computation against these traits; the buildsystem
//! supplies the implementations. Everything here is a read-only query
//! except `SourceFile`, which lets `$<TARGET_OBJECTS:...>` register the
//! object files it synthesizes.

use std::rc::Rc;

use crate::diagnostics::{Backtrace, MessageKind};
use crate::policy::{PolicyId, PolicyStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetType {
    Executable,
    StaticLibrary,
    SharedLibrary,
    ModuleLibrary,
    ObjectLibrary,
    InterfaceLibrary,
    UnknownLibrary,
    Utility,
}

impl TargetType {
    /// Target kinds that produce a main artifact on disk.
    pub fn has_artifact(self) -> bool {
        matches!(
            self,
            TargetType::Executable
                | TargetType::StaticLibrary
                | TargetType::SharedLibrary
                | TargetType::ModuleLibrary
                | TargetType::UnknownLibrary
        )
    }
}

/// A buildsystem target as seen by the evaluator.
pub trait Target {
    fn name(&self) -> &str;

    fn target_type(&self) -> TargetType;

    fn is_imported(&self) -> bool;

    /// Whether the target platform uses DLL import libraries.
    fn is_dll_platform(&self) -> bool;

    /// Libraries, and executables that export symbols.
    fn is_linkable(&self) -> bool;

    fn has_import_library(&self) -> bool;

    /// True for targets whose linker language imposes itself on
    /// dependents (static libraries).
    fn link_language_propagates_to_dependents(&self) -> bool;

    fn linker_language(&self, config: &str) -> String;

    /// Full path of the main artifact. `implib` selects the import
    /// library on platforms that use one; `realname` selects the real
    /// versioned file rather than the symlink name.
    fn full_path(&self, config: &str, implib: bool, realname: bool) -> String;

    fn output_directory(&self, config: &str) -> String;

    fn soname(&self, config: &str) -> String;

    fn get_property(&self, name: &str) -> Option<String>;

    /// Targets reachable through the link interface for transitive
    /// property evaluation, in link order.
    fn transitive_property_targets(&self, config: &str, head: &str) -> Vec<String>;

    /// Raw link-implementation items for the config. May contain names
    /// that are not targets (paths, raw flags); the evaluator filters.
    fn link_implementation_libraries(&self, config: &str) -> Vec<String>;

    fn link_interface_dependent_bool(&self, property: &str, config: &str) -> Option<bool>;

    fn link_interface_dependent_string(&self, property: &str, config: &str) -> Option<String>;

    fn link_interface_dependent_number_min(&self, property: &str, config: &str) -> Option<String>;

    fn link_interface_dependent_number_max(&self, property: &str, config: &str) -> Option<String>;

    fn policy_status(&self, policy: PolicyId) -> PolicyStatus;
}

/// A target in its generate-time role, able to enumerate object files.
pub trait GeneratorTarget {
    fn target_type(&self) -> TargetType;

    fn object_sources(&self, config: &str) -> Vec<String>;

    /// Object output directory, including any trailing separator.
    fn object_directory(&self) -> String;

    /// Object file name computed by the local generator for a source.
    fn object_file_name(&self, source: &str) -> String;
}

/// A source file handle returned by `BuildContext::get_or_create_source`.
pub trait SourceFile {
    fn set_object_library(&self, target_name: &str);

    fn set_property(&self, name: &str, value: &str);
}

/// The buildsystem state an evaluation runs against.
pub trait BuildContext {
    /// Value of a cache/script definition, or the empty string.
    fn get_safe_definition(&self, name: &str) -> String;

    fn get_definition(&self, name: &str) -> Option<String>;

    /// Looks up a target by name, resolving alias names to their real
    /// target.
    fn find_target(&self, name: &str) -> Option<&dyn Target>;

    fn is_alias(&self, name: &str) -> bool;

    fn find_generator_target(&self, name: &str) -> Option<&dyn GeneratorTarget>;

    fn policy_status(&self, policy: PolicyId) -> PolicyStatus;

    /// Diagnostic sink for fatal errors and author warnings.
    fn issue_message(&self, kind: MessageKind, text: &str, backtrace: &Backtrace);

    /// Classifies a compile feature, returning its language, or an error
    /// describing why the feature is unknown.
    fn compile_feature_known(&self, target: &str, feature: &str) -> anyhow::Result<String>;

    /// Features the toolchain for `lang` can be asked about at all.
    fn compile_features_available(&self, lang: &str) -> anyhow::Result<Vec<String>>;

    fn have_feature_available(&self, target: &dyn Target, lang: &str, feature: &str) -> bool;

    fn get_or_create_source(&self, path: &str, generated: bool) -> Rc<dyn SourceFile>;
}
