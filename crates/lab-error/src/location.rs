use core::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(&'static core::panic::Location<'static>);

impl Location {

    #[inline(always)]
    pub fn file(&self) -> &'static str {
        self.0.file()
    }

    #[inline(always)]
    pub fn line(&self) -> u32 {
        self.0.line()
    }
}

impl Display for Location {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <core::panic::Location<'_> as Display>::fmt(self.0, f)
    }
}

impl Debug for Location {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <core::panic::Location<'_> as Debug>::fmt(self.0, f)
    }
}

#[inline(always)]
pub fn new(loc: &'static core::panic::Location<'static>) -> Location {
    Location(loc)
}

#[macro_export]
macro_rules! caller {
    () => {
        $crate::location::new(core::panic::Location::caller())
    };
}
