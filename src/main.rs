use std::process;

fn main() {
    if let Err(err) = mdmerge::app::run() {
        eprintln!("Aggregate failed: {:#}", err);
        process::exit(1);
    }
}
