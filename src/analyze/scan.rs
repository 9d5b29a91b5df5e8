pub(crate) const SINGLE_QUOTE: char = '\'';
pub(crate) const DOUBLE_QUOTE: char = '"';

const BLANK: char = '_';

fn is_quote(c: char) -> bool {
    c == SINGLE_QUOTE || c == DOUBLE_QUOTE
}

/// Copy of `expression` with the contents of every closed quoted literal
/// replaced by a neutral character, so structural checks only see code. Quote
/// characters themselves are kept. An opening quote with no closer is left
/// for the quote analyzer and the rest of the text stays unmasked.
pub(crate) fn mask_literals(expression: &str) -> Vec<char> {
    let mut chars: Vec<char> = expression.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_quote(c) {
            i += 1;
            continue;
        }
        let Some(len) = chars[i + 1..].iter().position(|&d| d == c) else {
            break;
        };
        for blank in &mut chars[i + 1..i + 1 + len] {
            *blank = BLANK;
        }
        i += len + 2;
    }
    chars
}

pub(crate) fn count(chars: &[char], target: char) -> usize {
    chars.iter().filter(|&&c| c == target).count()
}

pub(crate) fn position(chars: &[char], target: char) -> Option<usize> {
    chars.iter().position(|&c| c == target)
}

/// Whether `window` contains a two-character `&&` or `||` token.
pub(crate) fn has_operator(window: &[char]) -> bool {
    window
        .windows(2)
        .any(|pair| pair == ['&', '&'] || pair == ['|', '|'])
}
