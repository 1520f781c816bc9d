//! In-memory test double for an HTTP client.
//!
//! Register canned responses keyed by url, verb and parameters, then send
//! requests through [`ResponseMocker`] (or any code written against
//! [`HttpClient`]) and get back [`ResponseRecord`]s without touching the
//! network.
//!
//! ```
//! use response_mocker::{HttpClient, RequestOptions, ResponseMocker, ResponseSpec};
//! use serde_json::json;
//!
//! let mut mocker = ResponseMocker::new();
//! let spec = ResponseSpec::new("https://x/y", 200, ["get"])
//!     .param("page", "2")
//!     .json(json!({"page": "2"}));
//! mocker.register_response(spec).unwrap();
//!
//! let response = mocker.get("https://x/y?page=2", RequestOptions::new()).unwrap();
//! assert_eq!(response.json(), json!({"page": "2"}));
//! ```

pub mod cli;
pub mod codec;
pub mod commands;
pub mod error;
pub mod history;
pub mod logging;
pub mod mocker;
pub mod ports;
pub mod registry;
pub mod response;

pub use error::{HttpError, MockError};
pub use history::{HistoryQueue, Transcript};
pub use mocker::{Fixture, MockerConfig, ResponseMocker};
pub use ports::{HttpClient, RequestOptions};
pub use registry::{ResponseSpec, StatusCode};
pub use response::{RequestRecord, ResponseRecord};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
