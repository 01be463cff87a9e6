//! Scaffold binary entry point.

fn main() {
    if let Err(e) = scaffold::cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
