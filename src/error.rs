use thiserror::Error;

use crate::analyze::{PolicyError, SyntaxError};
use crate::extract::ExtractError;
use crate::SignatureError;

/// Unified error type covering every stage that can reject an expression.
///
/// Returned by [`Policy::from_expression()`](crate::Policy::from_expression) and
/// carried by [`ValidationOutcome`](crate::ValidationOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
