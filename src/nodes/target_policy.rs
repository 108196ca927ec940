//! `$<TARGET_POLICY:pol>`: whether the head target was built with the
//! NEW behavior of a policy.

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::{report_error, MessageKind};
use crate::nodes::NodeDescriptor;
use crate::policy::{PolicyId, PolicyStatus, TARGET_POLICY_WHITELIST};

pub static TARGET_POLICY: NodeDescriptor = NodeDescriptor::new(eval_target_policy);

fn eval_target_policy(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    _dag: Option<&DagChecker<'_>>,
) -> String {
    let Some(target) = context.head_target else {
        report_error(
            context,
            content.original_expression(),
            "$<TARGET_POLICY:prop> may only be used with binary targets.  It may \
             not be used with add_custom_command or add_custom_target.",
        );
        return String::new();
    };

    context.had_context_sensitive_condition = true;

    if let Some(policy) = PolicyId::from_name(&parameters[0]) {
        if TARGET_POLICY_WHITELIST.contains(&policy) {
            return match target.policy_status(policy) {
                PolicyStatus::Warn => {
                    context.build.issue_message(
                        MessageKind::AuthorWarning,
                        &policy.warning(),
                        &context.backtrace,
                    );
                    "0"
                }
                PolicyStatus::Old
                | PolicyStatus::RequiredIfUsed
                | PolicyStatus::RequiredAlways => "0",
                PolicyStatus::New => "1",
            }
            .to_owned();
        }
    }

    let mut accepted = String::new();
    for policy in TARGET_POLICY_WHITELIST {
        accepted.push_str(" * ");
        accepted.push_str(policy.name());
        accepted.push('\n');
    }
    report_error(
        context,
        content.original_expression(),
        &format!(
            "$<TARGET_POLICY:prop> may only be used with a limited number of \
             policies.  Currently it may be used with the following policies:\n{accepted}"
        ),
    );
    String::new()
}
