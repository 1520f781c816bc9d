//! Registered response templates.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, ParamValue, Params};

/// Status code of a canned response.
///
/// Any value is accepted at registration; only values that read as an
/// integer are ever treated as HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    /// A numeric status such as `200`. Not range-checked.
    Code(i64),
    /// A free-form status such as `"999"` or `"teapot"`.
    Text(String),
}

impl StatusCode {
    /// The status as an integer, when it can be read as one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Whether this is an integer status of 400 or above.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.as_int().is_some_and(|code| code >= 400)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<&str> for StatusCode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StatusCode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A registered template: which requests it answers and what it answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// Scheme, host and path. Holds no query string once registered.
    pub url: String,
    /// Status handed back on every match.
    pub status_code: StatusCode,
    /// Verb tokens this spec answers, compared as given.
    pub verbs: IndexSet<String>,
    /// Parameters a request must carry to select this spec. Empty means any.
    #[serde(default)]
    pub url_params: Params,
    /// Canned body.
    #[serde(default)]
    pub decoded_json: Value,
    /// Canned response headers.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
}

impl ResponseSpec {
    /// Creates a spec with no parameters, a `null` body and no headers.
    pub fn new<I, V>(url: impl Into<String>, status_code: impl Into<StatusCode>, verbs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            url: url.into(),
            status_code: status_code.into(),
            verbs: verbs.into_iter().map(Into::into).collect(),
            url_params: Params::new(),
            decoded_json: Value::Null,
            headers: IndexMap::new(),
        }
    }

    /// Requires `key` to be present with `value` on matching requests.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.url_params.insert(key.into(), value.into());
        self
    }

    /// Replaces the required parameters wholesale.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.url_params = params;
        self
    }

    /// Sets the canned body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.decoded_json = body;
        self
    }

    /// Adds a canned response header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Folds a query string carried by `url` into `url_params`.
    ///
    /// Explicit `url_params` keep precedence over the query string.
    #[must_use]
    pub fn normalized(self) -> Self {
        if !self.url.contains('?') {
            return self;
        }
        let (base, embedded) = codec::split_url(&self.url);
        Self { url: base, url_params: codec::merge(embedded, &self.url_params), ..self }
    }

    /// Whether this spec places no constraint on request parameters.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        codec::is_blank(&self.url_params)
    }

    /// Whether `verb` is one of the verbs this spec answers.
    #[must_use]
    pub fn answers(&self, verb: &str) -> bool {
        self.verbs.contains(verb)
    }

    /// The registered URL with its parameters re-attached.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        codec::join_url(&self.url, &self.url_params)
    }

    /// Whether registering both `self` and `other` would make them
    /// indistinguishable for some request.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> bool {
        self.url == other.url
            && self.verbs.iter().any(|verb| other.answers(verb))
            && codec::params_equal(&self.url_params, &other.url_params)
    }
}

impl fmt::Display for ResponseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbs: Vec<&str> = self.verbs.iter().map(String::as_str).collect();
        write!(f, "[{}] {} -> {}", verbs.join("|"), self.canonical_url(), self.status_code)
    }
}
