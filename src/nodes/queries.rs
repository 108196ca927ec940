//! Compiler, platform, and configuration queries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::{report_error, MessageKind};
use crate::nodes::{Arity, NodeDescriptor};
use crate::policy::{PolicyId, PolicyStatus};
use crate::utils::expand_list;

static IDENTIFIER_VALIDATOR: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9_]*$").unwrap());
static VERSION_VALIDATOR: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9.]*$").unwrap());

pub static C_COMPILER_ID: NodeDescriptor =
    NodeDescriptor::new(eval_c_compiler_id).arity(Arity::OneOrZero);
pub static CXX_COMPILER_ID: NodeDescriptor =
    NodeDescriptor::new(eval_cxx_compiler_id).arity(Arity::OneOrZero);
pub static C_COMPILER_VERSION: NodeDescriptor =
    NodeDescriptor::new(eval_c_compiler_version).arity(Arity::OneOrZero);
pub static CXX_COMPILER_VERSION: NodeDescriptor =
    NodeDescriptor::new(eval_cxx_compiler_version).arity(Arity::OneOrZero);
pub static PLATFORM_ID: NodeDescriptor =
    NodeDescriptor::new(eval_platform_id).arity(Arity::OneOrZero);
pub static CONFIGURATION: NodeDescriptor =
    NodeDescriptor::new(eval_configuration).arity(Arity::Exact(0));
pub static CONFIG: NodeDescriptor = NodeDescriptor::new(eval_config).arity(Arity::OneOrZero);

fn require_head_target(
    node: &str,
    context: &mut EvaluationContext<'_>,
    content: &Content,
) -> bool {
    if context.head_target.is_some() {
        return true;
    }
    report_error(
        context,
        content.original_expression(),
        &format!(
            "$<{node}> may only be used with binary targets.  It may not be used \
             with add_custom_command or add_custom_target."
        ),
    );
    false
}

fn compiler_id(
    lang: &str,
    node: &str,
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
) -> String {
    if !require_head_target(node, context, content) {
        return String::new();
    }

    let compiler_id = context
        .build
        .get_safe_definition(&format!("CMAKE_{lang}_COMPILER_ID"));
    let Some(tested) = parameters.first() else {
        return compiler_id;
    };

    if !IDENTIFIER_VALIDATOR.is_match(tested) {
        report_error(
            context,
            content.original_expression(),
            "Expression syntax not recognized.",
        );
        return String::new();
    }

    if *tested == compiler_id {
        return "1".to_owned();
    }

    if tested.eq_ignore_ascii_case(&compiler_id) {
        match context.build.policy_status(PolicyId::Cmp0044) {
            PolicyStatus::Warn => {
                context.build.issue_message(
                    MessageKind::AuthorWarning,
                    &PolicyId::Cmp0044.warning(),
                    &context.backtrace,
                );
                return "1".to_owned();
            }
            PolicyStatus::Old => return "1".to_owned(),
            PolicyStatus::New | PolicyStatus::RequiredIfUsed | PolicyStatus::RequiredAlways => {}
        }
    }
    "0".to_owned()
}

fn eval_c_compiler_id(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    compiler_id("C", "C_COMPILER_ID", parameters, context, content)
}

fn eval_cxx_compiler_id(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    compiler_id("CXX", "CXX_COMPILER_ID", parameters, context, content)
}

fn compiler_version(
    lang: &str,
    node: &str,
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
) -> String {
    if !require_head_target(node, context, content) {
        return String::new();
    }

    let compiler_version = context
        .build
        .get_safe_definition(&format!("CMAKE_{lang}_COMPILER_VERSION"));
    let Some(tested) = parameters.first() else {
        return compiler_version;
    };

    if !VERSION_VALIDATOR.is_match(tested) {
        report_error(
            context,
            content.original_expression(),
            "Expression syntax not recognized.",
        );
        return String::new();
    }

    if crate::utils::version_compare(tested, &compiler_version).is_eq() {
        "1"
    } else {
        "0"
    }
    .to_owned()
}

fn eval_c_compiler_version(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    compiler_version("C", "C_COMPILER_VERSION", parameters, context, content)
}

fn eval_cxx_compiler_version(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    compiler_version("CXX", "CXX_COMPILER_VERSION", parameters, context, content)
}

fn eval_platform_id(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    let platform_id = context.build.get_safe_definition("CMAKE_SYSTEM_NAME");
    let Some(tested) = parameters.first() else {
        return platform_id;
    };

    if !IDENTIFIER_VALIDATOR.is_match(tested) {
        report_error(
            context,
            content.original_expression(),
            "Expression syntax not recognized.",
        );
        return String::new();
    }

    if *tested == platform_id { "1" } else { "0" }.to_owned()
}

fn eval_configuration(
    _parameters: &[String],
    context: &mut EvaluationContext<'_>,
    _content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    context.had_context_sensitive_condition = true;
    context.config.clone()
}

fn eval_config(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    dag: Option<&DagChecker<'_>>,
) -> String {
    let Some(tested) = parameters.first() else {
        return eval_configuration(parameters, context, content, dag);
    };

    if !IDENTIFIER_VALIDATOR.is_match(tested) {
        report_error(
            context,
            content.original_expression(),
            "Expression syntax not recognized.",
        );
        return String::new();
    }

    context.had_context_sensitive_condition = true;
    if context.config.is_empty() {
        return if tested.is_empty() { "1" } else { "0" }.to_owned();
    }

    if tested.eq_ignore_ascii_case(&context.config) {
        return "1".to_owned();
    }

    // Imported targets can map the active config onto the configs they
    // actually provide.
    if let Some(current) = context.current_target {
        if current.is_imported() {
            let map_property = format!(
                "MAP_IMPORTED_CONFIG_{}",
                context.config.to_ascii_uppercase()
            );
            if let Some(mapped) = current.get_property(&map_property) {
                let tested = tested.to_ascii_uppercase();
                let found = expand_list(&mapped.to_ascii_uppercase())
                    .iter()
                    .any(|config| *config == tested);
                return if found { "1" } else { "0" }.to_owned();
            }
        }
    }
    "0".to_owned()
}
