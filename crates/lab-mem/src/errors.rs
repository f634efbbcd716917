#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    FixedCapacity {
        capacity: usize,
    },
    MaxCapacityExceeded {
        capacity: usize,
    },
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of range for array of size {}", index, len)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::FixedCapacity { capacity } => {
                write!(f, "exceeded fixed capacity of {}", capacity)
            },
            Self::MaxCapacityExceeded { capacity } => {
                write!(f, "capacity {} can't be grown any further", capacity)
            },
        }
    }
}

impl core::error::Error for CapacityError {}
