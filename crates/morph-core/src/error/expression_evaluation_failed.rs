use super::Error;

/// Error when expression evaluation fails.
///
/// This occurs when:
/// - An argument cannot be resolved against the evaluation input
/// - A member is read from a value that is not a record
/// - An operator or function is applied to operands of the wrong type
///
/// Null intermediates never produce this error once a mapping has been
/// rewritten with null guards.
#[derive(Debug)]
pub(super) struct ExpressionEvaluationFailed {
    message: Box<str>,
}

impl std::error::Error for ExpressionEvaluationFailed {}

impl core::fmt::Display for ExpressionEvaluationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expression evaluation failed: {}", self.message)
    }
}

impl Error {
    /// Creates an expression evaluation failed error.
    pub fn expression_evaluation_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExpressionEvaluationFailed(
            ExpressionEvaluationFailed {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an expression evaluation failure.
    pub fn is_expression_evaluation_failed(&self) -> bool {
        self.chain_has(|kind| matches!(kind, super::ErrorKind::ExpressionEvaluationFailed(_)))
    }
}
