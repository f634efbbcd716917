//! Walkthrough of [`OwnedArray`] and the program error kinds.

use core::f64::consts::{E, PI};

use std::io::{self, Write};

use compact_str::CompactString;

use lab_mem::OwnedArray;

use lab_error::{Kind, ProgramError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sample {
    value: i32,
}

impl Sample {

    #[inline(always)]
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    #[inline(always)]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline(always)]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DataPoint {
    data: f64,
    name: CompactString,
}

impl DataPoint {

    pub fn new(data: f64, name: impl AsRef<str>) -> Self {
        Self {
            data,
            name: CompactString::new(name),
        }
    }

    #[inline(always)]
    pub fn data(&self) -> f64 {
        self.data
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn raise(err: ProgramError) -> Result<(), ProgramError> {
    Err(err)
}

/// Fills two arrays, prints them and reports the expected failures on `err`.
pub fn run(out: &mut impl Write, err: &mut impl Write) -> lab_error::Result<()> {
    let mut samples = OwnedArray::new();
    let mut points = OwnedArray::new();

    samples.push_back(Sample::new(10));
    samples.push_back(Sample::new(20));
    samples.push_back(Sample::new(30));

    points.push_back(DataPoint::new(PI, "Pi"));
    points.push_back(DataPoint::new(E, "Euler"));

    writeln!(out, "Samples:")?;
    for i in 0..samples.len() {
        writeln!(out, "Element {}: {}", i, samples.get(i)?.value())?;
    }

    writeln!(out)?;
    writeln!(out, "Data points:")?;
    for (i, point) in points.iter().enumerate() {
        writeln!(out, "Element {}: {} = {:.2}", i, point.name(), point.data())?;
    }

    match samples.get(100) {
        Ok(sample) => writeln!(out, "{}", sample.value())?,
        Err(e) => writeln!(err, "Error: {}", e)?,
    }

    if let Err(e) = raise(ProgramError::division_by_zero()) {
        if e.is(Kind::DivisionByZero) {
            writeln!(err, "Caught error: {}", e)?;
        }
    }

    if let Err(e) = raise(ProgramError::with_message(
        Kind::MemoryAccess,
        "attempt to access released memory",
    )) {
        if e.is(Kind::MemoryAccess) {
            writeln!(err, "Caught error: {}", e)?;
        }
    }

    if let Err(e) = raise(ProgramError::overflow()) {
        if e.is(Kind::Math) {
            writeln!(err, "Caught math error ({}): {}", e.kind(), e)?;
        }
    }

    lab_log::debug!("samples capacity {}, points capacity {}", samples.capacity(), points.capacity());
    Ok(())
}

/// Runs [`run`] and reports anything it didn't handle itself.
pub fn run_reporting(out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    if let Err(e) = run(out, err) {
        writeln!(err, "Unexpected error: {}", e)?;
    }
    writeln!(out, "Program finished. Memory released.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_reporting(&mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn prints_both_arrays() {
        let (out, _) = capture();
        assert_eq!(
            out,
            "Samples:\n\
             Element 0: 10\n\
             Element 1: 20\n\
             Element 2: 30\n\
             \n\
             Data points:\n\
             Element 0: Pi = 3.14\n\
             Element 1: Euler = 2.72\n\
             Program finished. Memory released.\n",
        );
    }

    #[test]
    fn reports_expected_failures() {
        let (_, err) = capture();
        let lines: Vec<_> = err.lines().collect();
        assert_eq!(lines, vec![
            "Error: index 100 is out of range for array of size 3",
            "Caught error: division by zero",
            "Caught error: attempt to access released memory",
            "Caught math error (OverflowError): overflow",
        ]);
    }

    #[test]
    fn sample_value_is_mutable() {
        let mut sample = Sample::new(1);
        sample.set_value(2);
        assert_eq!(sample.value(), 2);
    }
}
