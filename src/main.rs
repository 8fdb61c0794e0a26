use std::process;
use clap::Parser;
use fontprof::cli::{self, CliArgs};
use fontprof::utils::logging;

fn main() {
    let args = CliArgs::parse();
    logging::init(args.debug);

    if let Err(e) = cli::run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
