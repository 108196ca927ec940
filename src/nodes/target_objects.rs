//! `$<TARGET_OBJECTS:tgt>`: object files of an object library, for
//! internal consumption only.

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::host::TargetType;
use crate::nodes::NodeDescriptor;

pub static TARGET_OBJECTS: NodeDescriptor = NodeDescriptor::new(eval_target_objects);

fn eval_target_objects(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    if !context.evaluate_for_buildsystem {
        report_error(
            context,
            content.original_expression(),
            "The evaluation of the TARGET_OBJECTS generator expression is only \
             suitable for consumption by the build system.  It is not suitable for \
             writing out elsewhere.",
        );
        return String::new();
    }

    let target_name = &parameters[0];
    let build = context.build;
    let Some(target) = build.find_generator_target(target_name) else {
        report_error(
            context,
            content.original_expression(),
            &format!("Objects of target \"{target_name}\" referenced but no such target exists."),
        );
        return String::new();
    };
    if target.target_type() != TargetType::ObjectLibrary {
        report_error(
            context,
            content.original_expression(),
            &format!("Objects of target \"{target_name}\" referenced but is not an OBJECT library."),
        );
        return String::new();
    }

    let object_directory = target.object_directory();
    let mut result = String::new();
    let mut sep = "";
    for source in target.object_sources(&context.config) {
        let object_file = format!("{object_directory}{}", target.object_file_name(&source));
        let source_file = build.get_or_create_source(&object_file, true);
        source_file.set_object_library(target_name);
        source_file.set_property("EXTERNAL_OBJECT", "1");
        result.push_str(sep);
        result.push_str(&object_file);
        sep = ";";
    }
    result
}
