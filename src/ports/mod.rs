//! Port traits defining the boundary code under test talks to.
//!
//! Production code depends on [`HttpClient`]; tests hand it a
//! [`crate::mocker::ResponseMocker`].

pub mod http;

pub use http::{HttpClient, RequestOptions};
