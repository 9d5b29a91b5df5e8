use std::fmt;

/// An expression the analyzers accepted but the call grammar cannot read,
/// e.g. `equalTo('a') && (1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractError {
    message: String,
}

impl ExtractError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read function calls: {}", self.message)
    }
}

impl std::error::Error for ExtractError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtractError::new("expected function name");
        assert_eq!(
            err.to_string(),
            "could not read function calls: expected function name"
        );
    }
}
