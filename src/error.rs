//! Error conditions raised by the mocker.

use thiserror::Error;

use crate::response::{RequestRecord, ResponseRecord};

/// Errors raised while registering or resolving mocked responses.
#[derive(Debug, Error)]
pub enum MockError {
    /// A spec with the same url, an overlapping verb and equal parameters
    /// is already registered.
    #[error("{message}")]
    DuplicateRegistration {
        /// Human-readable description of the clash.
        message: String,
    },

    /// No registered spec matches the request.
    #[error("{message}")]
    UnregisteredUrl {
        /// Human-readable description of the request.
        message: String,
    },

    /// More than one registered spec matches the request.
    #[error("{message}")]
    AmbiguousUrlMatch {
        /// Human-readable description listing the conflicting specs.
        message: String,
    },

    /// A response carried an error status and the caller asked to check it.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A fixture or transcript file could not be read, parsed or written.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Environment configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MockError {
    /// The diagnostic message carried by this error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateRegistration { message }
            | Self::UnregisteredUrl { message }
            | Self::AmbiguousUrlMatch { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Raised by [`ResponseRecord::raise_for_status`] for error statuses.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpError {
    message: String,
    request: RequestRecord,
    response: Box<ResponseRecord>,
}

impl HttpError {
    pub(crate) fn new(message: String, response: &ResponseRecord) -> Self {
        Self {
            message,
            request: response.request().clone(),
            response: Box::new(response.clone()),
        }
    }

    /// Human-readable description including status and URL.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request that produced the failing response.
    #[must_use]
    pub fn request(&self) -> &RequestRecord {
        &self.request
    }

    /// The failing response itself.
    #[must_use]
    pub fn response(&self) -> &ResponseRecord {
        &self.response
    }
}
