//! Validate branch names against a small boolean DSL of function calls.
//!
//! An expression such as `startsWith('feature/') && isCharNum(8) || equalTo('main')`
//! is checked for structural problems, split into calls, resolved against a
//! registry of built-in predicates, and evaluated with `&&` binding tighter than
//! `||`. Every call is traced, so a host can show why a branch passed or failed.
//!
//! ```
//! let outcome = branchgate::execute("contains('-') && isSectionNum(8,'-')", "feature/123-test-branch");
//! assert!(outcome.result());
//! for entry in outcome.trace() {
//!     println!("{entry}");
//! }
//! ```

mod analyze;
mod builtins;
mod error;
mod evaluate;
mod extract;
mod resolve;
mod types;

pub use analyze::{PolicyError, SyntaxError};
pub use error::ValidationError;
pub use extract::{extract, ExtractError};
pub use types::{
    Args, Argument, BuiltinFn, DataType, EvaluationOutcome, Expression, FunctionCall,
    FunctionRegistry, FunctionSignature, Policy, RegistryError, Segment, SignatureError,
    TraceEntry, ValidationOutcome,
};

/// Run the structural analyzers (parentheses, quotes, operators, negative
/// numbers) over `expression`.
pub fn validate_syntax(expression: &str) -> ValidationOutcome {
    analyze::analyze(expression.trim()).into()
}

/// Validate `expression` and evaluate it against `branch`.
///
/// Any validation failure yields a `false` result with an empty trace and the
/// failing [`ValidationOutcome`].
#[tracing::instrument(level = "debug")]
pub fn execute(expression: &str, branch: &str) -> EvaluationOutcome {
    match Policy::from_expression(expression) {
        Ok(policy) => {
            let outcome = policy.evaluate(branch);
            tracing::debug!(result = outcome.result(), "evaluated");
            outcome
        }
        Err(e) => {
            tracing::debug!(error = %e, "expression rejected");
            EvaluationOutcome::rejected(ValidationOutcome::invalid(e))
        }
    }
}
