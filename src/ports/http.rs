//! HTTP client port.

use indexmap::IndexMap;
use serde_json::Value;

use crate::codec::{ParamValue, Params};
use crate::error::MockError;
use crate::response::ResponseRecord;

/// Optional parts of a request beyond its verb and URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Explicit parameters; these win over the URL's query string per key.
    pub params: Params,
    /// Request headers.
    pub headers: IndexMap<String, String>,
    /// Request body.
    pub payload: Option<Value>,
}

impl RequestOptions {
    /// Options with no parameters, headers or payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replaces the explicit parameters wholesale.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Issues requests by verb and URL.
///
/// Code written against this trait can be handed the mocker in tests.
/// The verb helpers all route through [`HttpClient::request`].
pub trait HttpClient {
    /// Sends `verb` to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be answered.
    fn request(
        &mut self,
        verb: &str,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseRecord, MockError>;

    /// Sends a `get`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn get(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("get", url, options)
    }

    /// Sends a `post`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn post(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("post", url, options)
    }

    /// Sends a `put`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn put(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("put", url, options)
    }

    /// Sends a `patch`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn patch(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("patch", url, options)
    }

    /// Sends a `delete`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn delete(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("delete", url, options)
    }

    /// Sends a `head`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn head(&mut self, url: &str, options: RequestOptions) -> Result<ResponseRecord, MockError> {
        self.request("head", url, options)
    }

    /// Sends an `options`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    fn options(
        &mut self,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseRecord, MockError> {
        self.request("options", url, options)
    }
}
