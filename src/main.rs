//! Binary entrypoint for the `response-mocker` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    response_mocker::logging::init();
    match response_mocker::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
