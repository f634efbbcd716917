use std::io;

fn main() {
    lab_log::init();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    if let Err(e) = lab::demo::run_reporting(&mut out, &mut err) {
        lab_log::error!("{}", e);
    }
}
