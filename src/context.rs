use fxhash::FxHashMap;
use indexmap::IndexSet;

use crate::diagnostics::Backtrace;
use crate::host::{BuildContext, Target};

/// Per-evaluation scratch state.
///
/// One context lives for exactly one top-level `evaluate` call; the
/// caller owns it and reads the flags and side-effect sets afterwards.
/// Transitive property evaluation runs nested expressions against child
/// contexts and merges them back with [`EvaluationContext::absorb`].
pub struct EvaluationContext<'a> {
    pub build: &'a dyn BuildContext,

    /// Active configuration; may be empty for single-config setups.
    pub config: String,

    /// Suppress messages while still recording `had_error`.
    pub quiet: bool,

    /// The target whose usage requirements started this evaluation.
    /// `None` outside binary targets (custom commands).
    pub head_target: Option<&'a dyn Target>,

    /// The target whose property list is currently being read; differs
    /// from the head during transitive propagation.
    pub current_target: Option<&'a dyn Target>,

    /// Enables artifacts only meaningful inside the generator itself,
    /// such as `$<TARGET_OBJECTS:...>`.
    pub evaluate_for_buildsystem: bool,

    pub backtrace: Backtrace,

    /// Sticky fatal flag; once set every evaluator returns empty.
    pub had_error: bool,

    /// Sticky flag telling the caller the result depends on config or
    /// target state and must not be reused across configs.
    pub had_context_sensitive_condition: bool,

    /// Every target the expression mentioned.
    pub all_targets: IndexSet<String>,

    /// Targets whose artifacts the result depends on.
    pub depend_targets: IndexSet<String>,

    /// Properties read on the head target, for link-interface
    /// consistency diagnostics.
    pub seen_target_properties: IndexSet<String>,

    /// `(target, language)` -> standard level recorded when
    /// `$<COMPILE_FEATURES:...>` runs during link-libraries evaluation.
    pub max_language_standard: FxHashMap<(String, String), String>,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(build: &'a dyn BuildContext, config: impl Into<String>) -> EvaluationContext<'a> {
        EvaluationContext {
            build,
            config: config.into(),
            quiet: false,
            head_target: None,
            current_target: None,
            evaluate_for_buildsystem: false,
            backtrace: Backtrace::new(),
            had_error: false,
            had_context_sensitive_condition: false,
            all_targets: IndexSet::new(),
            depend_targets: IndexSet::new(),
            seen_target_properties: IndexSet::new(),
            max_language_standard: FxHashMap::default(),
        }
    }

    /// Sets both the head and current target, the usual starting point
    /// for evaluating a binary target's requirements.
    pub fn with_target(mut self, target: Option<&'a dyn Target>) -> EvaluationContext<'a> {
        self.head_target = target;
        self.current_target = target;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> EvaluationContext<'a> {
        self.quiet = quiet;
        self
    }

    pub fn for_buildsystem(mut self, enabled: bool) -> EvaluationContext<'a> {
        self.evaluate_for_buildsystem = enabled;
        self
    }

    /// A fresh context for a nested evaluation sharing this context's
    /// settings but its own accumulators.
    pub(crate) fn sub_context(
        &self,
        head: Option<&'a dyn Target>,
        current: Option<&'a dyn Target>,
    ) -> EvaluationContext<'a> {
        let mut sub = EvaluationContext::new(self.build, self.config.clone());
        sub.quiet = self.quiet;
        sub.evaluate_for_buildsystem = self.evaluate_for_buildsystem;
        sub.backtrace = self.backtrace.clone();
        sub.head_target = head;
        sub.current_target = current;
        sub
    }

    /// Merges a finished nested evaluation back: sticky flags or in,
    /// side-effect sets union.
    pub(crate) fn absorb(&mut self, child: EvaluationContext<'_>) {
        self.had_error |= child.had_error;
        self.had_context_sensitive_condition |= child.had_context_sensitive_condition;
        self.all_targets.extend(child.all_targets);
        self.depend_targets.extend(child.depend_targets);
        self.seen_target_properties.extend(child.seen_target_properties);
        self.max_language_standard.extend(child.max_language_standard);
    }
}
