use super::Error;

/// Error when a registry has no mapper for a requested type pair.
#[derive(Debug)]
pub(super) struct UnregisteredMapping {
    source: Box<str>,
    destination: Box<str>,
}

impl std::error::Error for UnregisteredMapping {}

impl core::fmt::Display for UnregisteredMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no mapping registered from `{}` to `{}`",
            self.source, self.destination
        )
    }
}

impl Error {
    /// Creates an unregistered mapping error for the `source -> destination` pair.
    pub fn unregistered_mapping(source: &str, destination: &str) -> Error {
        Error::from(super::ErrorKind::UnregisteredMapping(UnregisteredMapping {
            source: source.into(),
            destination: destination.into(),
        }))
    }

    /// Returns `true` if this error is an unregistered mapping error.
    pub fn is_unregistered_mapping(&self) -> bool {
        self.chain_has(|kind| matches!(kind, super::ErrorKind::UnregisteredMapping(_)))
    }
}
