use core::error;

use crate::Error;

/// Attaches a context line to the error of a [`Result`].
pub trait Context<T> {

    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, Error>;

    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, Error>;
}

impl<T, E: error::Error + Send + Sync + 'static> Context<T> for Result<T, E> {

    #[track_caller]
    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::new_tracked(ctx, err)),
        }
    }

    #[track_caller]
    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::new_tracked(f(), err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ProgramError, Tracked};

    #[test]
    fn context_wraps_error() {
        let res: Result<(), ProgramError> = Err(ProgramError::overflow());
        let err = res.ctx_err("adding samples").unwrap_err();
        assert_eq!(err.to_string(), "adding samples: overflow");
        assert!(err.location().is_some());
    }

    #[test]
    fn context_closure_runs_only_on_error() {
        let res: Result<u8, ProgramError> = Ok(3);
        let value = res.ctx_err_with(|| -> String { unreachable!() }).unwrap();
        assert_eq!(value, 3);
    }
}
