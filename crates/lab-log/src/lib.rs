#[macro_use]

mod log;
mod error;
pub mod fmt;
pub mod filter;

pub use error::LogError;
pub use fmt::{LogFmt, LogFmtBuilder};
pub use filter::Filter;

pub type Result<T> = core::result::Result<T, LogError>;

pub use log::*;
