use core::{
    error,
    fmt::{self, Display, Debug, Formatter},
};

use compact_str::CompactString;

use lab_mem::CapacityError;

use crate::{Location, Tracked, ProgramError};

/// Application level error: a context line, an optional source error and an
/// optional creation [`Location`].
pub struct Error {
    ctx: CompactString,
    source: Option<Box<dyn error::Error + Send + Sync>>,
    loc: Option<Location>,
}

impl Error {

    #[inline(always)]
    pub fn new(ctx: impl AsRef<str>, err: impl error::Error + Send + Sync + 'static) -> Self {
        Self::new_internal(ctx, Some(Box::new(err)), None)
    }

    #[track_caller]
    pub fn new_tracked(ctx: impl AsRef<str>, err: impl error::Error + Send + Sync + 'static) -> Self {
        Self::new_internal(ctx, Some(Box::new(err)), Some(caller!()))
    }

    #[inline(always)]
    pub fn just_context(ctx: impl AsRef<str>) -> Self {
        Self::new_internal(ctx, None, None)
    }

    #[track_caller]
    pub fn just_context_tracked(ctx: impl AsRef<str>) -> Self {
        Self::new_internal(ctx, None, Some(caller!()))
    }

    fn new_internal(
        ctx: impl AsRef<str>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
        loc: Option<Location>,
    ) -> Self
    {
        Self {
            ctx: CompactString::new(ctx),
            source,
            loc,
        }
    }

    #[inline(always)]
    pub fn context(&self) -> &str {
        &self.ctx
    }

    /// Returns the source as a [`ProgramError`] if that is what it is.
    pub fn program_error(&self) -> Option<&ProgramError> {
        self.source.as_deref()?.downcast_ref::<ProgramError>()
    }
}

impl Display for Error {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {}", self.ctx, err),
            None => write!(f, "{}", self.ctx),
        }
    }
}

impl Debug for Error {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "Error(ctx: {}, err: {:?})", self.ctx, err),
            None => write!(f, "Error(ctx: {}, err: None)", self.ctx),
        }
    }
}

impl error::Error for Error {

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(err) => Some(&**err),
            None => None,
        }
    }
}

impl Tracked for Error {

    fn location(&self) -> Option<Location> {
        self.loc
    }
}

impl From<ProgramError> for Error {

    fn from(value: ProgramError) -> Self {
        let loc = value.location();
        Self::new_internal(value.kind().name(), Some(Box::new(value)), loc)
    }
}

impl From<CapacityError> for Error {

    fn from(value: CapacityError) -> Self {
        Self::new("array error", value)
    }
}

impl From<std::io::Error> for Error {

    fn from(value: std::io::Error) -> Self {
        Self::new("IO error", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::error::Error as _;

    use crate::Kind;

    #[test]
    fn display_joins_context_and_source() {
        let err = Error::new("failed to read", ProgramError::memory_access());
        assert_eq!(err.to_string(), "failed to read: memory access error");
        assert!(err.source().is_some());
        assert_eq!(Error::just_context("plain").to_string(), "plain");
    }

    #[test]
    fn program_error_is_recoverable() {
        let err: Error = ProgramError::with_message(Kind::Overflow, "too big").into();
        assert_eq!(err.context(), "OverflowError");
        let inner = err.program_error().unwrap();
        assert!(inner.is(Kind::Math));
        assert_eq!(inner.describe(), "too big");
    }

    #[test]
    fn capacity_error_converts() {
        let err: Error = CapacityError::IndexOutOfBounds { index: 100, len: 3 }.into();
        assert_eq!(err.to_string(), "array error: index 100 is out of range for array of size 3");
        assert!(err.program_error().is_none());
    }

    #[test]
    fn tracked_keeps_location() {
        let err = Error::just_context_tracked("here");
        assert!(err.location().is_some());
        assert!(Error::just_context("there").location().is_none());
    }
}
