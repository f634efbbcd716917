//! Growth rules for [`OwnedArray`](crate::OwnedArray).
//!
//! Both policies clamp the requested initial capacity to at least one slot,
//! so a growing array always makes progress.

pub trait CapacityPolicy {
    fn can_grow() -> bool;
    fn initial(requested: usize) -> usize;
    fn grow(current: usize) -> Option<usize>;
}

/// Doubles the capacity every time the array is full.
#[derive(Clone, Copy, Default, Debug)]
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn can_grow() -> bool {
        true
    }

    #[inline]
    fn initial(requested: usize) -> usize {
        requested.max(1)
    }

    #[inline]
    fn grow(current: usize) -> Option<usize> {
        current.max(1).checked_mul(2)
    }
}

/// Never grows past the initial capacity.
#[derive(Clone, Copy, Default, Debug)]
pub struct Fixed {}

impl CapacityPolicy for Fixed {

    #[inline]
    fn can_grow() -> bool {
        false
    }

    #[inline]
    fn initial(requested: usize) -> usize {
        requested.max(1)
    }

    #[inline]
    fn grow(_: usize) -> Option<usize> {
        None
    }
}
