//! Command dispatch and handlers.

pub mod check;
pub mod resolve;

use crate::cli::Command;
use crate::mocker::{MockerConfig, ResponseMocker};

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Check { fixture } => check::run(fixture),
        Command::Resolve { fixture, verb, url, params, headers, payload, raise_for_status } => {
            let request = resolve::ResolveRequest {
                verb,
                url,
                params,
                headers,
                payload: payload.as_deref(),
                raise_for_status: *raise_for_status,
            };
            resolve::run(fixture, &request)
        }
    }
}

/// Builds a mocker configured from the environment.
fn mocker_from_env() -> Result<ResponseMocker, String> {
    let config = MockerConfig::from_env().map_err(|e| e.to_string())?;
    Ok(ResponseMocker::from_config(config))
}
