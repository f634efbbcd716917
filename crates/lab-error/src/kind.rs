//! The program error taxonomy.
//!
//! ```text
//! Program
//! ├── MemoryAccess
//! └── Math
//!     ├── DivisionByZero
//!     └── Overflow
//! ```
//!
//! A [`ProgramError`] carries one [`Kind`] and a message. Handlers can match
//! the exact kind or any of its ancestors through [`ProgramError::is`].

use core::{
    error,
    fmt::{self, Debug, Display, Formatter},
};

use compact_str::CompactString;

use crate::{Location, Tracked};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Program,
    MemoryAccess,
    Math,
    DivisionByZero,
    Overflow,
}

impl Kind {

    pub const ALL: [Kind; 5] = [
        Self::Program,
        Self::MemoryAccess,
        Self::Math,
        Self::DivisionByZero,
        Self::Overflow,
    ];

    #[inline]
    pub fn parent(self) -> Option<Kind> {
        match self {
            Self::Program => None,
            Self::MemoryAccess | Self::Math => Some(Self::Program),
            Self::DivisionByZero | Self::Overflow => Some(Self::Math),
        }
    }

    /// Returns `true` if `self` is `ancestor` or one of its descendants.
    pub fn is_a(self, ancestor: Kind) -> bool {
        let mut kind = Some(self);
        while let Some(k) = kind {
            if k == ancestor {
                return true
            }
            kind = k.parent();
        }
        false
    }

    #[inline]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Program => "program error",
            Self::MemoryAccess => "memory access error",
            Self::Math => "math error",
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "overflow",
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Program => "ProgramError",
            Self::MemoryAccess => "MemoryAccessError",
            Self::Math => "MathError",
            Self::DivisionByZero => "DivisionByZeroError",
            Self::Overflow => "OverflowError",
        }
    }
}

impl Display for Kind {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ProgramError {
    kind: Kind,
    message: CompactString,
    loc: Option<Location>,
}

macro_rules! kind_constructors {
    ($($name:ident, $tracked:ident => $kind:ident),* $(,)?) => {
        $(
            #[inline(always)]
            pub fn $name() -> Self {
                Self::new(Kind::$kind)
            }

            #[track_caller]
            pub fn $tracked() -> Self {
                Self::new_internal(Kind::$kind, Kind::$kind.default_message(), Some(caller!()))
            }
        )*
    };
}

impl ProgramError {

    /// Creates an error of `kind` described by the kind's default text.
    #[inline(always)]
    pub fn new(kind: Kind) -> Self {
        Self::new_internal(kind, kind.default_message(), None)
    }

    #[inline(always)]
    pub fn with_message(kind: Kind, message: impl AsRef<str>) -> Self {
        Self::new_internal(kind, message, None)
    }

    #[inline(always)]
    pub fn program(message: impl AsRef<str>) -> Self {
        Self::with_message(Kind::Program, message)
    }

    kind_constructors! {
        memory_access, memory_access_tracked => MemoryAccess,
        math, math_tracked => Math,
        division_by_zero, division_by_zero_tracked => DivisionByZero,
        overflow, overflow_tracked => Overflow,
    }

    fn new_internal(kind: Kind, message: impl AsRef<str>, loc: Option<Location>) -> Self {
        Self {
            kind,
            message: CompactString::new(message),
            loc,
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline(always)]
    pub fn describe(&self) -> &str {
        &self.message
    }

    #[inline(always)]
    pub fn is(&self, kind: Kind) -> bool {
        self.kind.is_a(kind)
    }
}

impl Display for ProgramError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for ProgramError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.message.as_str())
    }
}

impl error::Error for ProgramError {}

impl Tracked for ProgramError {

    fn location(&self) -> Option<Location> {
        self.loc
    }
}
