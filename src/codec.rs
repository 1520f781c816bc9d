//! Parameter codec: canonical encoding of query/body parameters.
//!
//! A parameter mapping can reach the mocker in two shapes: as an explicit
//! mapping handed to a request, or as the query string suffix of a URL.
//! Both are normalized into [`Params`] and compared through [`params_equal`],
//! which ignores the order of keys but keeps the order of the values listed
//! under a single key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping of parameter names to values.
pub type Params = IndexMap<String, ParamValue>;

/// A parameter value: either a single scalar or a list repeated under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `key=value`
    One(String),
    /// `key=a&key=b`, in list order.
    Many(Vec<String>),
}

impl ParamValue {
    /// All values carried under the key, in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Appends another value, promoting a scalar to a list.
    fn push(&mut self, value: String) {
        match self {
            Self::One(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Many(vec![first, value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Adds `value` under `key`, collapsing repeated keys into a list.
pub fn append(params: &mut Params, key: impl Into<String>, value: impl Into<String>) {
    let value = value.into();
    match params.entry(key.into()) {
        indexmap::map::Entry::Occupied(mut slot) => slot.get_mut().push(value),
        indexmap::map::Entry::Vacant(slot) => {
            slot.insert(ParamValue::One(value));
        }
    }
}

/// Returns the `key=value` segments of `params`, in insertion order.
#[must_use]
pub fn segments(params: &Params) -> Vec<String> {
    params
        .iter()
        .flat_map(|(key, value)| value.values().iter().map(move |v| format!("{key}={v}")))
        .collect()
}

/// Encodes `params` as `key=value` segments joined with `&`.
///
/// Keys are emitted in insertion order; list values emit one segment per
/// element under the same key. No percent-encoding is applied.
#[must_use]
pub fn encode(params: &Params) -> String {
    segments(params).join("&")
}

/// Segments ordered for comparison: stable-sorted by key so that list order
/// within one key survives.
fn canonical(params: &Params) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = params
        .iter()
        .flat_map(|(key, value)| value.values().iter().map(move |v| (key.as_str(), v.as_str())))
        .collect();
    pairs.sort_by_key(|pair| pair.0);
    pairs
}

/// Whether two mappings are the same parameter set for matching purposes.
#[must_use]
pub fn params_equal(left: &Params, right: &Params) -> bool {
    canonical(left) == canonical(right)
}

/// Whether `params` encodes to no segments at all.
#[must_use]
pub fn is_blank(params: &Params) -> bool {
    params.values().all(|value| value.values().is_empty())
}

/// Parses a query string (without the leading `?`) into [`Params`].
///
/// Repeated keys collapse into a list; a segment without `=` maps to an
/// empty value; empty segments are skipped.
#[must_use]
pub fn decode(query: &str) -> Params {
    let mut params = Params::new();
    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        append(&mut params, key, value);
    }
    params
}

/// Splits `url` at the first `?` into its base and decoded query parameters.
#[must_use]
pub fn split_url(url: &str) -> (String, Params) {
    match url.split_once('?') {
        Some((base, query)) => (base.to_string(), decode(query)),
        None => (url.to_string(), Params::new()),
    }
}

/// Joins a base URL and parameters back into a single URL.
#[must_use]
pub fn join_url(base: &str, params: &Params) -> String {
    if is_blank(params) {
        base.to_string()
    } else {
        format!("{base}?{}", encode(params))
    }
}

/// Overlays `explicit` onto `embedded`; an explicit key replaces the embedded
/// value entirely.
#[must_use]
pub fn merge(mut embedded: Params, explicit: &Params) -> Params {
    for (key, value) in explicit {
        embedded.insert(key.clone(), value.clone());
    }
    embedded
}
