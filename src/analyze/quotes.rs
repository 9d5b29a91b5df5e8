use super::error::SyntaxError;
use super::scan::{DOUBLE_QUOTE, SINGLE_QUOTE};

/// Quote checks over the raw expression.
pub(crate) fn analyze(expression: &str) -> Result<(), SyntaxError> {
    let singles = expression.matches(SINGLE_QUOTE).count();
    let doubles = expression.matches(DOUBLE_QUOTE).count();

    let quote = match (singles, doubles) {
        (0, 0) => return Ok(()),
        (_, 0) => SINGLE_QUOTE,
        (0, _) => DOUBLE_QUOTE,
        _ => return Err(SyntaxError::MixedQuotes),
    };

    if (singles + doubles) % 2 != 0 {
        return Err(SyntaxError::UnmatchedQuote { quote });
    }

    let mut depth = 0_usize;
    let mut in_literal = false;
    for c in expression.chars() {
        if in_literal {
            in_literal = c != quote;
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == quote => {
                if depth == 0 {
                    return Err(SyntaxError::QuoteOutsideArguments { quote });
                }
                in_literal = true;
            }
            _ => {}
        }
    }

    Ok(())
}
