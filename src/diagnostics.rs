use std::fmt;

use crate::context::EvaluationContext;

/// Severity of a message dispatched through the host's diagnostic sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    FatalError,
    AuthorWarning,
}

/// Opaque evaluation backtrace handed through to the diagnostic sink.
///
/// The engine never inspects the frames; it only carries them from the
/// caller to `BuildContext::issue_message` so the host can point at the
/// script location that produced the expression.
#[derive(Clone, Debug, Default)]
pub struct Backtrace {
    frames: Vec<String>,
}

impl Backtrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<String>) -> Self {
        Backtrace { frames }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "  {frame}")?;
        }
        Ok(())
    }
}

/// Reports a fatal evaluation error: sets the sticky error flag on the
/// context and, unless the evaluation is quiet, dispatches a formatted
/// message through the host. Callers must return the empty string after
/// calling this.
pub fn report_error(context: &mut EvaluationContext<'_>, expression: &str, reason: &str) {
    context.had_error = true;
    if context.quiet {
        return;
    }

    let text = format!("Error evaluating generator expression:\n  {expression}\n{reason}");
    context
        .build
        .issue_message(MessageKind::FatalError, &text, &context.backtrace);
}
