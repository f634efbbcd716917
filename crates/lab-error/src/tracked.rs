use crate::Location;

/// Trait for errors that may remember where they were created.
///
/// # Example
/// ```rust
/// use lab_error::{ProgramError, Tracked};
///
/// let err = ProgramError::overflow_tracked();
/// assert!(err.location().is_some());
/// ```
pub trait Tracked {

    fn location(&self) -> Option<Location>;
}
