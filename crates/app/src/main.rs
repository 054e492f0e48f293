//! tplr - Main Entry Point

use std::process::ExitCode;

use clap::Parser;
use tplr::{Arguments, logging, run};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
