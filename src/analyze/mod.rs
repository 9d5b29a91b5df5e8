//! Structural analyzers that reject malformed expressions before any function
//! is looked up.
//!
//! Analyzers run in a fixed order and stop at the first failure:
//! parentheses, quotes, operators, then negative numbers.

mod error;
mod negatives;
mod operators;
mod parens;
mod quotes;
mod scan;

pub use error::{PolicyError, SyntaxError};

use crate::ValidationError;

/// Run every analyzer over `expression` (already trimmed).
///
/// # Errors
///
/// Returns the first [`SyntaxError`] or [`PolicyError`] found.
pub fn analyze(expression: &str) -> Result<(), ValidationError> {
    let masked = scan::mask_literals(expression);
    parens::analyze(&masked)?;
    quotes::analyze(expression)?;
    operators::analyze(&masked)?;
    negatives::analyze(expression)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parentheses_are_checked_first() {
        assert_eq!(
            analyze("(contains('a' && b"),
            Err(ValidationError::Syntax(SyntaxError::LeadingParenthesis {
                symbol: '('
            }))
        );
    }

    #[test]
    fn unclosed_quote_is_not_a_parenthesis_error() {
        assert_eq!(
            analyze("equalTo('main)"),
            Err(ValidationError::Syntax(SyntaxError::UnmatchedQuote {
                quote: '\''
            }))
        );
    }

    #[test]
    fn quotes_before_operators() {
        assert_eq!(
            analyze(r#"contains('a') & contains("b")"#),
            Err(ValidationError::Syntax(SyntaxError::MixedQuotes))
        );
    }

    #[test]
    fn negative_numbers_last() {
        assert_eq!(
            analyze("isCharNum(-3)"),
            Err(ValidationError::Policy(PolicyError::NegativeNumber {
                function: "isCharNum".into()
            }))
        );
    }

    #[test]
    fn well_formed_expression_passes() {
        assert_eq!(
            analyze("startsWith('feature/') || startsWith('preview')"),
            Ok(())
        );
    }
}
