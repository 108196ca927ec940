//! `$<COMPILE_FEATURES:feat,...>`: feature availability test, with the
//! standard-level recording mode used during link-libraries evaluation.

use std::collections::BTreeMap;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::diagnostics::report_error;
use crate::nodes::{Arity, NodeDescriptor};

pub static COMPILE_FEATURES: NodeDescriptor =
    NodeDescriptor::new(eval_compile_features).arity(Arity::OneOrMore);

fn eval_compile_features(
    parameters: &[String],
    context: &mut EvaluationContext<'_>,
    content: &Content,
    dag: Option<&DagChecker<'_>>,
) -> String {
    let Some(target) = context.head_target else {
        report_error(
            context,
            content.original_expression(),
            "$<COMPILE_FEATURE> may only be used with binary targets.  It may not \
             be used with add_custom_command or add_custom_target.",
        );
        return String::new();
    };

    let build = context.build;
    let mut tested: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for feature in parameters {
        let lang = match build.compile_feature_known(target.name(), feature) {
            Ok(lang) => lang,
            Err(error) => {
                report_error(context, content.original_expression(), &error.to_string());
                return String::new();
            }
        };
        if !tested.contains_key(&lang) {
            if let Err(error) = build.compile_features_available(&lang) {
                report_error(context, content.original_expression(), &error.to_string());
                return String::new();
            }
        }
        tested.entry(lang).or_default().push(feature.as_str());
    }

    let evaluating_link_libraries = dag.is_some_and(|d| d.evaluating_link_libraries(None));

    for (lang, features) in &tested {
        for feature in features.iter().copied() {
            if build.have_feature_available(target, lang, feature) {
                continue;
            }
            if !evaluating_link_libraries {
                return "0".to_owned();
            }
            // While assembling link libraries an unavailable feature is
            // not fatal: record the standard level the consumer must
            // reach so the caller can raise it.
            let standard = target
                .get_property(&format!("{lang}_STANDARD"))
                .or_else(|| build.get_definition(&format!("CMAKE_{lang}_STANDARD_DEFAULT")));
            if let Some(standard) = standard {
                context
                    .max_language_standard
                    .insert((target.name().to_owned(), lang.clone()), standard);
            }
        }
    }
    "1".to_owned()
}
