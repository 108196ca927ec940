//! `$<TARGET_PROPERTY:[tgt,]prop>`: property reads with transitive
//! propagation over the link-interface graph.
//!
//! Each descent pushes a DAG frame; reachable link-interface targets are
//! re-read by synthesizing `$<TARGET_PROPERTY:dep,INTERFACE_...>`
//! sub-expressions and evaluating them under that frame, so user-written
//! cycles terminate through the frame checks instead of recursing
//! forever.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::{
    interface_property_for, is_transitive_interface_property, DagCheckResult, DagChecker,
};
use crate::diagnostics::report_error;
use crate::expression::CompiledExpression;
use crate::host::{Target, TargetType};
use crate::nodes::{Arity, NodeDescriptor};
use crate::policy::{PolicyId, PolicyStatus};
use crate::utils::{is_valid_target_name, strip_empty_list_elements};

pub static TARGET_PROPERTY: NodeDescriptor =
    NodeDescriptor::new(eval_target_property).arity(Arity::Dynamic);

static PROPERTY_NAME_VALIDATOR: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9_]+$").unwrap());

fn eval_target_property(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    dag_parent: Option<&DagChecker<'_>>,
) -> String {
    evaluate(parameters, context, content, dag_parent)
}

fn evaluate<'a>(
    parameters: &[String],
    context: &mut EvaluationContext<'a>,
    content: &Content,
    dag_parent: Option<&DagChecker<'_>>,
) -> String {
    if parameters.is_empty() || parameters.len() > 2 {
        report_error(
            context,
            content.original_expression(),
            "$<TARGET_PROPERTY:...> expression requires one or two parameters",
        );
        return String::new();
    }

    let build = context.build;
    let mut target: Option<&'a dyn Target> = context.head_target;
    let mut property_name = parameters[0].clone();

    if target.is_none() && parameters.len() == 1 {
        report_error(
            context,
            content.original_expression(),
            "$<TARGET_PROPERTY:prop>  may only be used with binary targets.  It may \
             not be used with add_custom_command or add_custom_target.  Specify the \
             target to read a property from using the $<TARGET_PROPERTY:tgt,prop> \
             signature instead.",
        );
        return String::new();
    }

    if parameters.len() == 2 {
        if parameters[0].is_empty() && parameters[1].is_empty() {
            report_error(
                context,
                content.original_expression(),
                "$<TARGET_PROPERTY:tgt,prop> expression requires a non-empty target \
                 name and property name.",
            );
            return String::new();
        }
        if parameters[0].is_empty() {
            report_error(
                context,
                content.original_expression(),
                "$<TARGET_PROPERTY:tgt,prop> expression requires a non-empty target name.",
            );
            return String::new();
        }

        let target_name = &parameters[0];
        property_name = parameters[1].clone();

        if !is_valid_target_name(target_name) {
            if !PROPERTY_NAME_VALIDATOR.is_match(&property_name) {
                report_error(
                    context,
                    content.original_expression(),
                    "Target name and property name not supported.",
                );
                return String::new();
            }
            report_error(
                context,
                content.original_expression(),
                "Target name not supported.",
            );
            return String::new();
        }

        if property_name == "ALIASED_TARGET" {
            if build.is_alias(target_name) {
                if let Some(aliased) = build.find_target(target_name) {
                    return aliased.name().to_owned();
                }
            }
            return String::new();
        }

        match build.find_target(target_name) {
            Some(found) => {
                context.all_targets.insert(found.name().to_owned());
                target = Some(found);
            }
            None => {
                report_error(
                    context,
                    content.original_expression(),
                    &format!("Target \"{target_name}\" not found."),
                );
                return String::new();
            }
        }
    }

    let Some(target) = target else {
        return String::new();
    };

    // Track the properties read on the head target so the caller can
    // check that link-interface evaluation saw one consistent value.
    if let Some(head) = context.head_target {
        if head.name() == target.name() {
            context
                .seen_target_properties
                .insert(property_name.clone());
        }
    }

    if property_name.is_empty() {
        report_error(
            context,
            content.original_expression(),
            "$<TARGET_PROPERTY:...> expression requires a non-empty property name.",
        );
        return String::new();
    }

    if !PROPERTY_NAME_VALIDATOR.is_match(&property_name) {
        report_error(
            context,
            content.original_expression(),
            "Property name not supported.",
        );
        return String::new();
    }

    if property_name == "LINKER_LANGUAGE" {
        if target.link_language_propagates_to_dependents()
            && dag_parent.is_some_and(|parent| {
                parent.evaluating_link_libraries(None) || parent.evaluating_sources()
            })
        {
            report_error(
                context,
                content.original_expression(),
                "LINKER_LANGUAGE target property can not be used while evaluating \
                 link libraries for a static library",
            );
            return String::new();
        }
        return target.linker_language(&context.config);
    }

    let dag = DagChecker::new(
        context.backtrace.clone(),
        target.name(),
        &property_name,
        dag_parent,
    );
    match dag.check() {
        DagCheckResult::SelfReference => {
            dag.report_self_reference(context, content.original_expression());
            return String::new();
        }
        DagCheckResult::CyclicReference => {
            // The cycle is closed further up the stack; skip silently.
            return String::new();
        }
        DagCheckResult::AlreadySeen => {
            if is_transitive_interface_property(&property_name) {
                // Revisiting would not find anything new.
                return String::new();
            }
        }
        DagCheckResult::Dag => {}
    }

    let raw_property = target.get_property(&property_name);

    if let Some(parent) = dag_parent {
        if parent.evaluating_link_libraries(None) {
            if interface_property_for(&property_name).is_some() {
                report_error(
                    context,
                    content.original_expression(),
                    "$<TARGET_PROPERTY:...> expression in link libraries evaluation \
                     depends on target property which is transitive over the link \
                     libraries, creating a recursion.",
                );
                return String::new();
            }
            if raw_property.is_none() {
                return String::new();
            }
        }
    }

    let mut interface_property_name = interface_property_for(&property_name);
    if interface_property_name.is_none() && property_name.starts_with("COMPILE_DEFINITIONS_") {
        // Legacy per-config definitions still propagate through the
        // plain interface definitions while the policy allows it.
        let status = build.policy_status(PolicyId::Cmp0043);
        if matches!(status, PolicyStatus::Warn | PolicyStatus::Old) {
            interface_property_name = Some("INTERFACE_COMPILE_DEFINITIONS");
        }
    }

    let head = context.head_target.unwrap_or(target);

    let mut linked_targets_content = String::new();
    if let Some(interface_name) = interface_property_name {
        if is_transitive_interface_property(&property_name) {
            // Reading the interface form walks the transitive property
            // targets computed for this config and head.
            let dependencies = target.transitive_property_targets(&context.config, head.name());
            if !dependencies.is_empty() {
                linked_targets_content = linked_targets_content_for(
                    &dependencies,
                    target,
                    head,
                    context,
                    &dag,
                    interface_name,
                );
            }
        } else {
            // Reading the base form collects from the direct link
            // implementation; entries that are not targets (paths, raw
            // flags) contribute nothing.
            let libraries: Vec<String> = target
                .link_implementation_libraries(&context.config)
                .into_iter()
                .filter(|library| build.find_target(library).is_some())
                .collect();
            if !libraries.is_empty() {
                linked_targets_content = linked_targets_content_for(
                    &libraries,
                    target,
                    head,
                    context,
                    &dag,
                    interface_name,
                );
            }
        }
    }
    linked_targets_content = strip_empty_list_elements(&linked_targets_content);
    if context.had_error {
        return String::new();
    }

    let Some(raw_property) = raw_property else {
        if target.is_imported() || target.target_type() == TargetType::InterfaceLibrary {
            return linked_targets_content;
        }
        if let Some(value) = target.link_interface_dependent_bool(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return if value { "1" } else { "0" }.to_owned();
        }
        if let Some(value) =
            target.link_interface_dependent_string(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return value;
        }
        if let Some(value) =
            target.link_interface_dependent_number_min(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return value;
        }
        if let Some(value) =
            target.link_interface_dependent_number_max(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return value;
        }
        return linked_targets_content;
    };

    // A present value can still be overridden by a numeric consistency
    // requirement computed over the link interface.
    if !target.is_imported()
        && dag_parent.is_some_and(|parent| !parent.evaluating_link_libraries(None))
    {
        if let Some(value) =
            target.link_interface_dependent_number_min(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return value;
        }
        if let Some(value) =
            target.link_interface_dependent_number_max(&property_name, &context.config)
        {
            context.had_context_sensitive_condition = true;
            return value;
        }
    }

    if let Some(interface_name) = interface_property_name {
        if is_transitive_interface_property(interface_name) {
            let compiled = CompiledExpression::parse(&raw_property);
            let mut sub_context = context.sub_context(Some(head), Some(target));
            let mut result = compiled.evaluate(&mut sub_context, Some(&dag));
            context.absorb(sub_context);
            if context.had_error {
                return String::new();
            }
            if !linked_targets_content.is_empty() {
                if !result.is_empty() {
                    result.push(';');
                }
                result.push_str(&linked_targets_content);
            }
            return result;
        }
    }

    raw_property
}

/// Reads `interface_property_name` from every linked target by
/// synthesizing one `;`-joined expression and evaluating it under the
/// current DAG frame.
fn linked_targets_content_for<'a>(
    dependencies: &[String],
    target: &'a dyn Target,
    head: &'a dyn Target,
    context: &mut EvaluationContext<'a>,
    dag: &DagChecker<'_>,
    interface_property_name: &str,
) -> String {
    let mut expression = String::new();
    let mut sep = "";
    for dependency in dependencies {
        if dependency == target.name() {
            // Broken code can list a target inside its own link
            // interface; following it would only manufacture a cycle.
            continue;
        }
        expression.push_str(sep);
        expression.push_str("$<TARGET_PROPERTY:");
        expression.push_str(dependency);
        expression.push(',');
        expression.push_str(interface_property_name);
        expression.push('>');
        sep = ";";
    }
    if expression.is_empty() {
        return String::new();
    }

    let compiled = CompiledExpression::parse(&expression);
    let mut sub_context = context.sub_context(Some(head), Some(target));
    let result = compiled.evaluate(&mut sub_context, Some(dag));
    context.absorb(sub_context);
    result
}
