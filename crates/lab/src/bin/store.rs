use std::io;

fn run() -> lab_error::Result<()> {
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    let store = lab::store::session(stdin, &mut out)?;
    lab_log::info!("store closed with {} products", store.len());
    Ok(())
}

fn main() {
    lab_log::init();
    if let Err(err) = run() {
        lab_log::error!("{}", err);
    }
}
