//! Brand/model records read from a whitespace separated text file.

use core::fmt::{self, Display, Formatter};

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use compact_str::CompactString;

use lab_mem::OwnedArray;

use lab_error::Context;

pub const DEFAULT_PATH: &str = "lab1.txt";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Car {
    brand: CompactString,
    model: CompactString,
}

impl Car {

    pub fn new(brand: impl AsRef<str>, model: impl AsRef<str>) -> Self {
        Self {
            brand: CompactString::new(brand),
            model: CompactString::new(model),
        }
    }

    #[inline(always)]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline(always)]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Display for Car {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Brand: {} Model: {}", self.brand, self.model)
    }
}

/// Reads `(brand, model)` token pairs until the end of `reader`.
///
/// A trailing token without a partner is ignored.
pub fn read_cars(reader: impl BufRead) -> io::Result<OwnedArray<Car>> {
    let mut tokens = crate::Tokens::new(reader);
    let mut cars = OwnedArray::new();
    while let Some(brand) = tokens.next_token()? {
        let Some(model) = tokens.next_token()? else {
            lab_log::debug!("ignoring unpaired token {:?}", brand);
            break
        };
        cars.push_back(Car::new(brand, model));
    }
    Ok(cars)
}

pub fn open(path: impl AsRef<Path>) -> lab_error::Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path)
        .ctx_err_with(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub fn load(path: impl AsRef<Path>) -> lab_error::Result<OwnedArray<Car>> {
    let path = path.as_ref();
    read_cars(open(path)?)
        .ctx_err_with(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn pairs_are_read_in_order() {
        let cars = read_cars("Toyota Camry\nBMW X5\nLada Vesta\n".as_bytes()).unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0], Car::new("Toyota", "Camry"));
        assert_eq!(cars[2].brand(), "Lada");
        assert_eq!(cars[2].model(), "Vesta");
    }

    #[test]
    fn pairs_may_cross_lines() {
        let cars = read_cars("Audi\nA4 Kia   Rio".as_bytes()).unwrap();
        let shown: Vec<_> = cars.iter().map(|car| car.to_string()).collect();
        assert_eq!(shown, vec!["Brand: Audi Model: A4", "Brand: Kia Model: Rio"]);
    }

    #[test]
    fn trailing_partial_pair_is_ignored() {
        let cars = read_cars("Audi A4 Volvo".as_bytes()).unwrap();
        assert_eq!(cars.len(), 1);
        assert!(read_cars("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ford Focus").unwrap();
        writeln!(file, "Skoda Octavia").unwrap();
        let cars = load(file.path()).unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[1], Car::new("Skoda", "Octavia"));
    }

    #[test]
    fn load_keeps_records_with_foreign_encoding() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Toyota Camry\nLada \xC2\xE5\xF1\xF2\xE0\nBMW X5\n").unwrap();
        let cars = load(file.path()).unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0], Car::new("Toyota", "Camry"));
        assert_eq!(cars[1].brand(), "Lada");
        assert!(cars[1].model().starts_with('\u{FFFD}'));
        assert_eq!(cars[2], Car::new("BMW", "X5"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
