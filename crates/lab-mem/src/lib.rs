#[macro_use]

mod macros;
mod errors;
mod allocator;
mod global_alloc;

pub mod capacity_policy;
pub mod owned_array;

pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::GlobalAlloc;
pub use capacity_policy::{CapacityPolicy, Doubling, Fixed};
pub use owned_array::{OwnedArray, FixedArray, DEFAULT_CAPACITY};
