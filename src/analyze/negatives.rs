use super::error::PolicyError;
use super::scan::{DOUBLE_QUOTE, SINGLE_QUOTE};

/// Rejects a `-` in any unquoted argument.
pub(crate) fn analyze(expression: &str) -> Result<(), PolicyError> {
    let mut function_start = 0;
    let mut current: Option<&str> = None;
    let mut literal: Option<char> = None;

    for (i, c) in expression.char_indices() {
        if let Some(q) = literal {
            if c == q {
                literal = None;
            }
            continue;
        }
        match c {
            '(' => current = Some(function_name(&expression[function_start..i])),
            ')' => {
                current = None;
                function_start = i + c.len_utf8();
            }
            SINGLE_QUOTE | DOUBLE_QUOTE => literal = Some(c),
            '-' => {
                if let Some(function) = current {
                    return Err(PolicyError::NegativeNumber {
                        function: function.to_owned(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// The identifier immediately before an opening parenthesis.
fn function_name(prefix: &str) -> &str {
    let trimmed = prefix.trim_end();
    let start = trimmed
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_alphanumeric() || c == '_')
        .last()
        .map_or(trimmed.len(), |(i, _)| i);
    &trimmed[start..]
}
