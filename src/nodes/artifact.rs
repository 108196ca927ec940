//! The target-file artifact family: which file, and which part of its
//! path.

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::host::TargetType;
use crate::nodes::NodeDescriptor;
use crate::utils::{file_name_component, file_path_component, is_valid_target_name};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Artifact {
    Main,
    Linker,
    Soname,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Qualifier {
    Full,
    Name,
    Dir,
}

macro_rules! artifact_node {
    ($static_name:ident, $fn_name:ident, $artifact:expr, $qualifier:expr) => {
        pub static $static_name: NodeDescriptor = NodeDescriptor::new($fn_name);

        fn $fn_name(
            parameters: &[String],
            context: &mut EvaluationContext<'_>,
            content: &Content,
            dag: Option<&DagChecker<'_>>,
        ) -> String {
            evaluate_artifact($artifact, $qualifier, parameters, context, content, dag)
        }
    };
}

artifact_node!(TARGET_FILE, eval_target_file, Artifact::Main, Qualifier::Full);
artifact_node!(
    TARGET_LINKER_FILE,
    eval_target_linker_file,
    Artifact::Linker,
    Qualifier::Full
);
artifact_node!(
    TARGET_SONAME_FILE,
    eval_target_soname_file,
    Artifact::Soname,
    Qualifier::Full
);
artifact_node!(
    TARGET_FILE_NAME,
    eval_target_file_name,
    Artifact::Main,
    Qualifier::Name
);
artifact_node!(
    TARGET_LINKER_FILE_NAME,
    eval_target_linker_file_name,
    Artifact::Linker,
    Qualifier::Name
);
artifact_node!(
    TARGET_SONAME_FILE_NAME,
    eval_target_soname_file_name,
    Artifact::Soname,
    Qualifier::Name
);
artifact_node!(
    TARGET_FILE_DIR,
    eval_target_file_dir,
    Artifact::Main,
    Qualifier::Dir
);
artifact_node!(
    TARGET_LINKER_FILE_DIR,
    eval_target_linker_file_dir,
    Artifact::Linker,
    Qualifier::Dir
);
artifact_node!(
    TARGET_SONAME_FILE_DIR,
    eval_target_soname_file_dir,
    Artifact::Soname,
    Qualifier::Dir
);

fn evaluate_artifact(
    artifact: Artifact,
    qualifier: Qualifier,
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    dag: Option<&DagChecker<'_>>,
) -> String {
    let name = &parameters[0];

    if !is_valid_target_name(name) {
        report_error(
            context,
            content.original_expression(),
            "Expression syntax not recognized.",
        );
        return String::new();
    }

    let build = context.build;
    let Some(target) = build.find_target(name) else {
        report_error(
            context,
            content.original_expression(),
            &format!("No target \"{name}\""),
        );
        return String::new();
    };

    if !target.target_type().has_artifact() {
        report_error(
            context,
            content.original_expression(),
            &format!("Target \"{name}\" is not an executable or library."),
        );
        return String::new();
    }

    if let Some(dag) = dag {
        if dag.evaluating_link_libraries(Some(name))
            || (dag.evaluating_sources() && name == dag.top_target())
        {
            report_error(
                context,
                content.original_expression(),
                "Expressions which require the linker language may not be used while \
                 evaluating link libraries",
            );
            return String::new();
        }
    }

    context.depend_targets.insert(name.clone());
    context.all_targets.insert(name.clone());

    let result = match artifact {
        Artifact::Soname => {
            if target.is_dll_platform() {
                report_error(
                    context,
                    content.original_expression(),
                    "TARGET_SONAME_FILE is not allowed for DLL target platforms.",
                );
                return String::new();
            }
            if target.target_type() != TargetType::SharedLibrary {
                report_error(
                    context,
                    content.original_expression(),
                    "TARGET_SONAME_FILE is allowed only for SHARED libraries.",
                );
                return String::new();
            }
            format!(
                "{}/{}",
                target.output_directory(&context.config),
                target.soname(&context.config)
            )
        }
        Artifact::Linker => {
            // The file used to link against the target (.so, .lib, .a).
            if !target.is_linkable() {
                report_error(
                    context,
                    content.original_expression(),
                    "TARGET_LINKER_FILE is allowed only for libraries and executables \
                     with ENABLE_EXPORTS.",
                );
                return String::new();
            }
            target.full_path(&context.config, target.has_import_library(), false)
        }
        Artifact::Main => target.full_path(&context.config, false, true),
    };

    match qualifier {
        Qualifier::Full => result,
        Qualifier::Name => file_name_component(&result),
        Qualifier::Dir => file_path_component(&result),
    }
}
