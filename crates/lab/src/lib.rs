pub mod tokens;
pub mod car;
pub mod store;
pub mod demo;

pub use tokens::Tokens;
pub use car::Car;
pub use store::{Product, Store, Command};
pub use demo::{Sample, DataPoint};
