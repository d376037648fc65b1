use clap::Parser;
use std::io;
use std::process;

use marina_ledger::{logger, run, Cli};

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    let stdin = io::stdin();
    if let Err(err) = run(&cli.data_file, stdin.lock(), io::stdout()) {
        tracing::error!("session aborted: {}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
