/*!
Generator-expression evaluation engine for a buildsystem generator.

Generator expressions are a small late-bound mini-language, written as
nested `$<IDENT:arg,arg,...>` forms intermixed with literal text. They
resolve after the build scripts have been processed, so their values can
depend on per-configuration facts: the selected config, compiler
identity, target properties, and what propagates across the link
interface.

The engine is pure computation: a [`CompiledExpression`] is evaluated
against an [`EvaluationContext`] that carries the active config, the head
target, and narrow query traits implemented by the host buildsystem
([`host::BuildContext`], [`host::Target`]). Transitive property reads
push [`dag::DagChecker`] frames along the call stack, which is what keeps
user-constructed link-interface cycles terminating.

```no_run
use genexpr::{CompiledExpression, EvaluationContext};

# fn demo(build: &dyn genexpr::host::BuildContext) {
let expr = CompiledExpression::parse("$<$<CONFIG:Debug>:DEBUG_MODE>");
let mut context = EvaluationContext::new(build, "Debug");
let value = expr.evaluate(&mut context, None);
# let _ = value;
# }
```
*/

pub mod ast;
pub mod context;
pub mod dag;
pub mod diagnostics;
pub mod errors;
pub mod eval;
pub mod expression;
pub mod host;
pub mod nodes;
mod parser;
pub mod policy;
pub mod utils;

#[cfg(test)]
mod tests;

pub use context::EvaluationContext;
pub use dag::{DagCheckResult, DagChecker};
pub use diagnostics::{Backtrace, MessageKind};
pub use errors::ExpressionError;
pub use expression::CompiledExpression;
pub use host::{BuildContext, GeneratorTarget, SourceFile, Target, TargetType};
pub use policy::{PolicyId, PolicyStatus};
