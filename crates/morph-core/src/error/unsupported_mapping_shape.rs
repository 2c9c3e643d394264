use super::Error;

/// Error when an in-place update is requested from a mapping whose body is not
/// an object initializer.
///
/// The factory and projection of such a mapping keep working; only `update`
/// reports this error.
#[derive(Debug)]
pub(super) struct UnsupportedMappingShape {
    destination: Box<str>,
}

impl std::error::Error for UnsupportedMappingShape {}

impl core::fmt::Display for UnsupportedMappingShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mapping to `{}` does not support in-place updates; \
             declare it with object-initialization syntax binding assignable members",
            self.destination
        )
    }
}

impl Error {
    /// Creates an unsupported mapping shape error for the given destination type.
    pub fn unsupported_mapping_shape(destination: &str) -> Error {
        Error::from(super::ErrorKind::UnsupportedMappingShape(
            UnsupportedMappingShape {
                destination: destination.into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported mapping shape error.
    pub fn is_unsupported_mapping_shape(&self) -> bool {
        self.chain_has(|kind| matches!(kind, super::ErrorKind::UnsupportedMappingShape(_)))
    }
}
