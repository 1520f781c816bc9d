//! `resolve` command: answer one request from a fixture.

use std::path::Path;

use serde_json::{json, Value};

use crate::codec::{self, Params};
use crate::ports::{HttpClient, RequestOptions};

/// The request described on the command line.
#[derive(Debug)]
pub struct ResolveRequest<'a> {
    /// Request verb.
    pub verb: &'a str,
    /// Request URL.
    pub url: &'a str,
    /// Explicit `key=value` parameters, in order.
    pub params: &'a [(String, String)],
    /// `name=value` headers, in order.
    pub headers: &'a [(String, String)],
    /// Body as JSON text.
    pub payload: Option<&'a str>,
    /// Fail on an error status.
    pub raise_for_status: bool,
}

/// Run the `resolve` command.
///
/// # Errors
///
/// Returns an error string if the history depth in the environment is
/// invalid, the fixture cannot be loaded, the request
/// matches no single response, or `raise_for_status` is set and the status
/// is an error.
pub fn run(fixture: &Path, request: &ResolveRequest<'_>) -> Result<(), String> {
    println!("{}", render(fixture, request)?);
    Ok(())
}

/// Resolves the request and renders the response as pretty JSON.
fn render(fixture: &Path, request: &ResolveRequest<'_>) -> Result<String, String> {
    let mut mocker = super::mocker_from_env()?;
    mocker.load_fixture(fixture).map_err(|e| format!("{}: {e}", fixture.display()))?;

    let response = mocker
        .request(request.verb, request.url, options(request)?)
        .map_err(|e| e.to_string())?;
    if request.raise_for_status {
        response.raise_for_status().map_err(|e| e.to_string())?;
    }

    let rendered = json!({
        "status_code": response.status_code(),
        "url": response.url(),
        "headers": response.headers(),
        "body": response.json(),
    });
    serde_json::to_string_pretty(&rendered).map_err(|e| format!("Failed to render response: {e}"))
}

fn options(request: &ResolveRequest<'_>) -> Result<RequestOptions, String> {
    let mut params = Params::new();
    for (key, value) in request.params {
        codec::append(&mut params, key.as_str(), value.as_str());
    }
    let mut options = RequestOptions::new().params(params);
    for (name, value) in request.headers {
        options = options.header(name.as_str(), value.as_str());
    }
    if let Some(raw) = request.payload {
        let payload: Value =
            serde_json::from_str(raw).map_err(|e| format!("--payload is not valid JSON: {e}"))?;
        options = options.payload(payload);
    }
    Ok(options)
}
