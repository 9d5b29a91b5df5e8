use super::error::SyntaxError;
use super::scan::{count, position};

/// Parenthesis checks over a masked expression.
pub(crate) fn analyze(masked: &[char]) -> Result<(), SyntaxError> {
    let open = count(masked, '(');
    let close = count(masked, ')');

    if masked.is_empty() || (open == 0 && close == 0) {
        return Err(SyntaxError::NoFunction);
    }

    if let Some(&first) = masked.first() {
        if first == '(' || first == ')' {
            return Err(SyntaxError::LeadingParenthesis { symbol: first });
        }
    }
    if masked.last() == Some(&'(') {
        return Err(SyntaxError::TrailingOpenParenthesis);
    }

    if open != close {
        let missing = if open > close { ')' } else { '(' };
        return Err(SyntaxError::MissingParenthesis { missing });
    }

    // Counts are equal and non-zero here, so both positions exist.
    if let (Some(first_open), Some(first_close)) = (position(masked, '('), position(masked, ')'))
    {
        if first_close < first_open {
            return Err(SyntaxError::CloseBeforeOpen);
        }
    }

    Ok(())
}
