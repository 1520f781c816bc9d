//! Record of a dispatched request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::codec::Params;

/// What the caller asked for, captured once per dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    id: Uuid,
    verb: String,
    url: String,
    params: Params,
    headers: IndexMap<String, String>,
    payload: Option<Value>,
}

impl RequestRecord {
    /// Captures a request with a fresh id.
    #[must_use]
    pub fn new(
        verb: impl Into<String>,
        url: impl Into<String>,
        params: Params,
        headers: IndexMap<String, String>,
        payload: Option<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            verb: verb.into(),
            url: url.into(),
            params,
            headers,
            payload,
        }
    }

    /// Unique id of this request.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Verb the request was sent with.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// URL without its query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query-string parameters merged with the explicit ones.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Request body, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}
