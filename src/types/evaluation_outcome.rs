use std::fmt;

use super::validation_outcome::ValidationOutcome;

/// One dispatched function call and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct TraceEntry {
    call: String,
    result: bool,
}

impl TraceEntry {
    pub fn new(call: impl Into<String>, result: bool) -> Self {
        Self {
            call: call.into(),
            result,
        }
    }

    /// The call as written in the expression.
    #[must_use]
    pub fn call(&self) -> &str {
        &self.call
    }

    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.call, self.result)
    }
}

/// Verdict of evaluating an expression against a branch name.
///
/// Contains the overall result, a trace entry for every call in left-to-right
/// order, and the validation outcome. An invalid expression yields `false`
/// with an empty trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct EvaluationOutcome {
    result: bool,
    trace: Vec<TraceEntry>,
    validation: ValidationOutcome,
}

impl EvaluationOutcome {
    pub(crate) fn evaluated(result: bool, trace: Vec<TraceEntry>) -> Self {
        Self {
            result,
            trace,
            validation: ValidationOutcome::ok(),
        }
    }

    pub(crate) fn rejected(validation: ValidationOutcome) -> Self {
        Self {
            result: false,
            trace: Vec::new(),
            validation,
        }
    }

    /// `true` if at least one AND-segment had every call return `true`.
    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }

    #[must_use]
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn validation(&self) -> &ValidationOutcome {
        &self.validation
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(e) = self.validation.error() {
            return write!(f, "invalid expression: {e}");
        }
        for entry in &self.trace {
            writeln!(f, "{entry}")?;
        }
        write!(f, "overall -> {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::SyntaxError;

    #[test]
    fn trace_entry_display() {
        let entry = TraceEntry::new("isCharNum(8)", true);
        assert_eq!(entry.to_string(), "isCharNum(8) -> true");
        assert_eq!(entry.call(), "isCharNum(8)");
        assert!(entry.result());
    }

    #[test]
    fn evaluated_outcome_accessors() {
        let outcome = EvaluationOutcome::evaluated(
            true,
            vec![
                TraceEntry::new("startsWith('feature/')", true),
                TraceEntry::new("startsWith('preview')", false),
            ],
        );
        assert!(outcome.result());
        assert!(outcome.is_valid());
        assert_eq!(outcome.trace().len(), 2);
        assert_eq!(outcome.validation().message(), "");
    }

    #[test]
    fn evaluated_outcome_display() {
        let outcome = EvaluationOutcome::evaluated(
            false,
            vec![
                TraceEntry::new("equalTo('main')", false),
                TraceEntry::new("lenLessThan(5)", true),
            ],
        );
        assert_eq!(
            outcome.to_string(),
            "equalTo('main') -> false\nlenLessThan(5) -> true\noverall -> false"
        );
    }

    #[test]
    fn rejected_outcome() {
        let outcome =
            EvaluationOutcome::rejected(ValidationOutcome::invalid(SyntaxError::NoFunction));
        assert!(!outcome.result());
        assert!(!outcome.is_valid());
        assert!(outcome.trace().is_empty());
        assert_eq!(
            outcome.to_string(),
            "invalid expression: expression must have at least one function"
        );
    }
}
