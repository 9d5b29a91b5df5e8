use super::error::SyntaxError;
use super::scan::{count, has_operator};

fn is_operator_char(c: char) -> bool {
    c == '&' || c == '|'
}

/// Operator checks over a masked expression.
pub(crate) fn analyze(masked: &[char]) -> Result<(), SyntaxError> {
    if count(masked, '(') >= 2 && !has_operator(masked) {
        return Err(SyntaxError::MissingOperators);
    }

    if let Some(&symbol) = masked.iter().find(|c| !c.is_whitespace()) {
        if is_operator_char(symbol) {
            return Err(SyntaxError::LeadingOperator { symbol });
        }
    }
    if let Some(&symbol) = masked.iter().rev().find(|c| !c.is_whitespace()) {
        if is_operator_char(symbol) {
            return Err(SyntaxError::TrailingOperator { symbol });
        }
    }

    for symbol in ['&', '|'] {
        if count(masked, symbol) % 2 != 0 {
            return Err(SyntaxError::UnpairedOperator { symbol });
        }
    }

    check_operator_runs(masked)?;
    check_call_boundaries(masked)
}

/// Every maximal run of `&`/`|` must be exactly `&&` or `||`.
fn check_operator_runs(masked: &[char]) -> Result<(), SyntaxError> {
    let mut i = 0;
    while i < masked.len() {
        if !is_operator_char(masked[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < masked.len() && is_operator_char(masked[i]) {
            i += 1;
        }
        let run = &masked[start..i];
        if run != ['&', '&'] && run != ['|', '|'] {
            return Err(SyntaxError::MalformedOperator {
                operator: run.iter().collect(),
            });
        }
    }
    Ok(())
}

/// Between each `)` and the next `(` there must be an operator token.
fn check_call_boundaries(masked: &[char]) -> Result<(), SyntaxError> {
    let mut last_close: Option<usize> = None;
    for (i, &c) in masked.iter().enumerate() {
        match c {
            ')' => last_close = Some(i),
            '(' => {
                if let Some(close) = last_close.take() {
                    if !has_operator(&masked[close..i]) {
                        return Err(SyntaxError::MissingOperatorAfter { column: close + 1 });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}
