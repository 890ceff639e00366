//! The wfsports command-line executable.

mod app;
mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wfsports: error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
