use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::cli::CliArgs;

mod cli;
mod commands;

pub type CliResult<T> = stegobmp_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // wrong arguments fail like every other error
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };
    debug!("{args:?}");

    match args.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
