use thiserror::Error;

/// A structurally malformed expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SyntaxError {
    #[error("expression must have at least one function")]
    NoFunction,

    #[error("expression must not start with '{symbol}'")]
    LeadingParenthesis { symbol: char },

    #[error("expression must not end with '('")]
    TrailingOpenParenthesis,

    #[error("expression is missing a '{missing}'")]
    MissingParenthesis { missing: char },

    #[error("')' appears before the first '('")]
    CloseBeforeOpen,

    #[error("expression must not mix single and double quotes")]
    MixedQuotes,

    #[error("expression has an unmatched {quote} quote")]
    UnmatchedQuote { quote: char },

    #[error("{quote} quotes are only allowed inside a function's argument list")]
    QuoteOutsideArguments { quote: char },

    #[error("functions must be separated by operators ('&&' or '||')")]
    MissingOperators,

    #[error("expression must not start with operator character '{symbol}'")]
    LeadingOperator { symbol: char },

    #[error("expression must not end with operator character '{symbol}'")]
    TrailingOperator { symbol: char },

    #[error("'{symbol}' must appear in pairs")]
    UnpairedOperator { symbol: char },

    #[error("invalid operator '{operator}'; expected '&&' or '||'")]
    MalformedOperator { operator: String },

    #[error("no '&&' or '||' after the function call ending at column {column}")]
    MissingOperatorAfter { column: usize },
}

/// An expression that is well formed but uses a forbidden literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PolicyError {
    #[error("negative numbers are not permitted (in '{function}')")]
    NegativeNumber { function: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_function_message() {
        assert_eq!(
            SyntaxError::NoFunction.to_string(),
            "expression must have at least one function"
        );
    }

    #[test]
    fn missing_parenthesis_message() {
        let err = SyntaxError::MissingParenthesis { missing: ')' };
        assert_eq!(err.to_string(), "expression is missing a ')'");
    }

    #[test]
    fn unmatched_quote_message() {
        let err = SyntaxError::UnmatchedQuote { quote: '\'' };
        assert_eq!(err.to_string(), "expression has an unmatched ' quote");
    }

    #[test]
    fn malformed_operator_message() {
        let err = SyntaxError::MalformedOperator {
            operator: "&&&".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid operator '&&&'; expected '&&' or '||'"
        );
    }

    #[test]
    fn missing_operator_after_message() {
        let err = SyntaxError::MissingOperatorAfter { column: 12 };
        assert_eq!(
            err.to_string(),
            "no '&&' or '||' after the function call ending at column 12"
        );
    }

    #[test]
    fn negative_number_message() {
        let err = PolicyError::NegativeNumber {
            function: "isCharNum".into(),
        };
        assert_eq!(
            err.to_string(),
            "negative numbers are not permitted (in 'isCharNum')"
        );
    }
}
