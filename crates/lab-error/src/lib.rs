#[macro_use]

pub mod location;
pub mod tracked;
mod kind;
mod error;
mod context;

pub use location::Location;
pub use tracked::Tracked;
pub use kind::{Kind, ProgramError};
pub use error::Error;
pub use context::Context;

pub type Result<T> = core::result::Result<T, Error>;
