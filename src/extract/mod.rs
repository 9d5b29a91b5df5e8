mod error;
mod grammar;

pub use error::ExtractError;

use crate::Expression;

/// Split an expression into its function calls, grouped into AND-segments
/// joined by `||`.
///
/// Arguments are classified here but not type-checked: a bare token that is
/// not an unsigned integer becomes [`Argument::Malformed`](crate::Argument::Malformed)
/// and is reported later by signature resolution.
///
/// # Errors
///
/// Returns [`ExtractError`] if the input is not a sequence of calls joined by
/// `&&` and `||`.
pub fn extract(expression: &str) -> Result<Expression, ExtractError> {
    use winnow::Parser;
    grammar::expression.parse(expression.trim()).map_err(|e| {
        let column = e.offset() + 1;
        let detail = e.inner().to_string();
        if detail.is_empty() {
            ExtractError::new(format!("unexpected input at column {column}"))
        } else {
            ExtractError::new(format!("{detail} at column {column}"))
        }
    })
}
