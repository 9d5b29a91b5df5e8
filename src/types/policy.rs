use std::fmt;

use super::call::{Expression, FunctionCall};
use super::evaluation_outcome::EvaluationOutcome;
use super::function_registry::{BuiltinFn, FunctionRegistry};
use crate::ValidationError;

/// A call bound to the overload it dispatches to.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedCall {
    pub(crate) call: FunctionCall,
    pub(crate) func: BuiltinFn,
}

/// A validated and resolved expression. Immutable, thread-safe, and reusable
/// across any number of branch names.
///
/// # Example
///
/// ```
/// use branchgate::Policy;
///
/// let policy = Policy::from_expression("startsWith('feature/') && isCharNum(8)").unwrap();
///
/// let outcome = policy.evaluate("feature/123-login");
/// assert!(outcome.result());
/// assert_eq!(outcome.trace().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Policy {
    pub(crate) segments: Vec<Vec<ResolvedCall>>,
    pub(crate) expression: Expression,
}

impl Policy {
    /// Validate, extract and resolve `expression` against the built-in functions.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] produced by the syntax analyzers,
    /// call extraction, or signature resolution.
    pub fn from_expression(expression: &str) -> Result<Self, ValidationError> {
        Self::with_registry(expression, FunctionRegistry::builtin())
    }

    /// Like [`from_expression()`](Self::from_expression), resolving calls
    /// against a caller-supplied registry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn with_registry(
        expression: &str,
        registry: &FunctionRegistry,
    ) -> Result<Self, ValidationError> {
        let expression = expression.trim();
        crate::analyze::analyze(expression)?;
        let extracted = crate::extract::extract(expression)?;
        tracing::debug!(
            segments = extracted.segments().len(),
            calls = extracted.calls().count(),
            "extracted function calls"
        );
        let policy = crate::resolve::resolve(extracted, registry)?;
        Ok(policy)
    }

    /// Evaluate against `branch`, dispatching and tracing every call.
    #[tracing::instrument(level = "debug", skip(self), fields(expression = %self.expression))]
    pub fn evaluate(&self, branch: &str) -> EvaluationOutcome {
        crate::evaluate::evaluate(&self.segments, branch)
    }

    /// The extracted expression this policy was built from.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Names of the functions called, in left-to-right order.
    #[must_use]
    pub fn function_names(&self) -> Vec<&str> {
        self.expression.calls().map(|c| c.name.as_str()).collect()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{PolicyError, SyntaxError};
    use crate::SignatureError;

    #[test]
    fn builds_from_expression() {
        let policy = Policy::from_expression("  contains('-') && isSectionNum(8,'-')  ").unwrap();
        assert_eq!(policy.function_names(), ["contains", "isSectionNum"]);
        assert_eq!(policy.to_string(), "contains('-') && isSectionNum(8,'-')");
    }

    #[test]
    fn syntax_errors_surface_first() {
        let err = Policy::from_expression("unknownFn('a'").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Syntax(SyntaxError::MissingParenthesis { missing: ')' })
        );
    }

    #[test]
    fn policy_errors_surface() {
        let err = Policy::from_expression("lenLessThan(-4)").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Policy(PolicyError::NegativeNumber {
                function: "lenLessThan".into()
            })
        );
    }

    #[test]
    fn extract_errors_surface() {
        let err = Policy::from_expression("equalTo('a') && (1)").unwrap_err();
        assert!(matches!(err, ValidationError::Extract(_)));
    }

    #[test]
    fn signature_errors_surface() {
        let err = Policy::from_expression("equalTo('a') || isBranch('b')").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Signature(SignatureError::UnknownFunction {
                name: "isBranch".into()
            })
        );
    }

    #[test]
    fn custom_registry() {
        use crate::{Args, DataType, FunctionSignature};

        fn is_main(branch: &str, _: &Args<'_>) -> Option<bool> {
            Some(branch == "main")
        }
        let registry = FunctionRegistry::from_table(&[FunctionSignature::new(
            "isMain",
            &[],
            &[] as &[DataType],
            is_main,
        )])
        .unwrap();

        let policy = Policy::with_registry("isMain()", &registry).unwrap();
        assert!(policy.evaluate("main").result());
        assert!(!policy.evaluate("develop").result());
        assert!(Policy::with_registry("equalTo('main')", &registry).is_err());
    }

    #[test]
    fn policy_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Policy>();
        assert_send_sync::<FunctionRegistry>();
    }
}
