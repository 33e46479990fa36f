use super::Error;

/// Error when a schema type declaration carries a kind tag the engine does
/// not recognize.
///
/// Emitting code for a kind the engine does not understand would be silently
/// wrong, so generation aborts instead.
#[derive(Debug)]
pub(super) struct UnsupportedKindError {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedKindError {}

impl core::fmt::Display for UnsupportedKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported schema type kind: {}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported kind error.
    pub fn unsupported_kind(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKindError {
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKind(_))
    }
}
