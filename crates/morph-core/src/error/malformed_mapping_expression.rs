use super::Error;

/// Error when a mapping expression cannot be turned into a mapper.
///
/// This occurs when:
/// - A member access names a member the base model does not have
/// - A member is read from something that is not a model
/// - An initializer binds a member that is missing or not assignable
/// - The same member is bound twice, or a type pair is registered twice
///
/// These errors are raised while the mapper is constructed and must abort
/// registration.
#[derive(Debug)]
pub(super) struct MalformedMappingExpression {
    message: Box<str>,
}

impl std::error::Error for MalformedMappingExpression {}

impl core::fmt::Display for MalformedMappingExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed mapping expression: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed mapping expression error.
    pub fn malformed_mapping_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedMappingExpression(
            MalformedMappingExpression {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a malformed mapping expression error.
    pub fn is_malformed_mapping_expression(&self) -> bool {
        self.chain_has(|kind| matches!(kind, super::ErrorKind::MalformedMappingExpression(_)))
    }
}
