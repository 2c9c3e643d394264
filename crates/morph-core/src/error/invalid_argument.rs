use super::Error;

/// Error when an operation receives a null argument it cannot work with.
///
/// `update` requires both a source and a destination; passing `None` for
/// either is a programming error reported with this kind.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    name: &'static str,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: `{}` must not be null", self.name)
    }
}

impl Error {
    /// Creates an invalid argument error for the parameter called `name`.
    pub fn invalid_argument(name: &'static str) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument { name }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.chain_has(|kind| matches!(kind, super::ErrorKind::InvalidArgument(_)))
    }
}
