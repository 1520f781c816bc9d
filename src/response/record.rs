//! Response object returned for every matched request.
//!
//! A record owns a private copy of the canned body. [`ResponseRecord::json`]
//! hands out a fresh copy on every call, so nothing a caller does to a
//! returned value can reach the registered spec or any later response.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::RequestRecord;
use crate::error::HttpError;
use crate::registry::{ResponseSpec, StatusCode};

/// A canned response, as seen by the code under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    status_code: StatusCode,
    url: String,
    headers: IndexMap<String, String>,
    body: Value,
    request: RequestRecord,
}

impl ResponseRecord {
    /// Builds the response for `request` from the spec it matched.
    #[must_use]
    pub fn from_spec(spec: &ResponseSpec, request: RequestRecord) -> Self {
        Self {
            status_code: spec.status_code.clone(),
            url: spec.canonical_url(),
            headers: spec.headers.clone(),
            body: spec.decoded_json.clone(),
            request,
        }
    }

    /// Status code as registered.
    #[must_use]
    pub fn status_code(&self) -> &StatusCode {
        &self.status_code
    }

    /// URL of the matched spec, with its parameters attached.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// The request this record answers.
    #[must_use]
    pub fn request(&self) -> &RequestRecord {
        &self.request
    }

    /// A new copy of the decoded body.
    #[must_use]
    pub fn json(&self) -> Value {
        self.body.clone()
    }

    /// The body serialized as JSON text.
    #[must_use]
    pub fn text(&self) -> String {
        self.body.to_string()
    }

    /// Whether the status is not an error status.
    #[must_use]
    pub fn ok(&self) -> bool {
        !self.status_code.is_error()
    }

    /// Fails when the status reads as an integer of 400 or above.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpError`] carrying a message, the request and this
    /// response.
    pub fn raise_for_status(&self) -> Result<(), HttpError> {
        let Some(code) = self.status_code.as_int().filter(|code| *code >= 400) else {
            return Ok(());
        };
        let kind = if code < 500 { "Client" } else { "Server" };
        let message = format!("{code} {kind} Error for url: {}", self.url);
        Err(HttpError::new(message, self))
    }
}
