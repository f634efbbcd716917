use std::io::{self, Write};

use lab::car;

fn run() -> lab_error::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| car::DEFAULT_PATH.to_owned());
    let mut out = io::stdout().lock();
    let cars = match car::open(&path) {
        Ok(reader) => {
            writeln!(out, "file is opened")?;
            car::read_cars(reader).unwrap_or_else(|err| {
                lab_log::warn!("failed to read {}: {}", path, err);
                Default::default()
            })
        },
        Err(err) => {
            writeln!(out, "file is NOT opened")?;
            lab_log::warn!("{}", err);
            Default::default()
        },
    };
    for record in &cars {
        writeln!(out, "{}", record)?;
    }
    lab_log::info!("read {} cars from {}", cars.len(), path);
    Ok(())
}

fn main() {
    lab_log::init();
    if let Err(err) = run() {
        lab_log::error!("{}", err);
    }
}
