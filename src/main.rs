//! hf-fetch entry point

use clap::Parser;
use hf_fetch::cli::{fetch, Cli};
use hf_fetch::logging;

fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    if let Err(e) = fetch::execute(&cli.fetch) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
