//! The response mocker: registration front door and request dispatcher.

pub mod config;
pub mod fixture;

pub use config::MockerConfig;
pub use fixture::Fixture;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::error::MockError;
use crate::history::{HistoryQueue, Transcript};
use crate::ports::{HttpClient, RequestOptions};
use crate::registry::{Registry, ResponseSpec};
use crate::response::{RequestRecord, ResponseRecord};

/// In-memory stand-in for an HTTP client.
///
/// Requests are answered from registered [`ResponseSpec`]s and every
/// returned response is remembered in a bounded history.
#[derive(Debug, Default)]
pub struct ResponseMocker {
    registry: Registry,
    history: HistoryQueue,
}

impl ResponseMocker {
    /// A mocker with an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mocker whose history keeps the last `request_q_depth` responses.
    #[must_use]
    pub fn with_q_depth(request_q_depth: usize) -> Self {
        Self::from_config(MockerConfig::with_q_depth(request_q_depth))
    }

    /// A mocker built from `config`.
    #[must_use]
    pub fn from_config(config: MockerConfig) -> Self {
        Self { registry: Registry::new(), history: HistoryQueue::new(config.request_q_depth) }
    }

    /// Registers a canned response.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::DuplicateRegistration`] if an equal spec exists.
    pub fn register_response(&mut self, spec: ResponseSpec) -> Result<(), MockError> {
        self.registry.register(spec)
    }

    /// Registers a canned response without checking for duplicates.
    ///
    /// Useful for exercising ambiguous matches.
    pub fn force_register(&mut self, spec: ResponseSpec) {
        self.registry.force_register(spec);
    }

    /// Registers every response in the fixture at `path`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if the file is unreadable and
    /// [`MockError::DuplicateRegistration`] on the first clashing entry.
    pub fn load_fixture(&mut self, path: &Path) -> Result<usize, MockError> {
        let fixture = Fixture::load(path)?;
        self.register_all(fixture)
    }

    /// Registers every response of an already parsed fixture.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::DuplicateRegistration`] on the first clashing entry.
    pub fn register_all(&mut self, fixture: Fixture) -> Result<usize, MockError> {
        let count = fixture.responses.len();
        for spec in fixture.responses {
            self.registry.register(spec)?;
        }
        Ok(count)
    }

    /// Forgets every registered response. The history is kept.
    pub fn clear_responses(&mut self) {
        self.registry.clear();
    }

    /// Forgets every returned response.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Answers `verb` on `url` from the registry and records the response.
    ///
    /// A query string on `url` is split off and merged with
    /// `options.params`, explicit values replacing embedded ones per key.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::UnregisteredUrl`] or
    /// [`MockError::AmbiguousUrlMatch`] when the request does not select
    /// exactly one spec.
    pub fn dispatch(
        &mut self,
        verb: &str,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseRecord, MockError> {
        let (base, embedded) = codec::split_url(url);
        let params = codec::merge(embedded, &options.params);
        let spec = self.registry.find_match(verb, &base, &params)?;

        debug!(verb, url = %base, params = %codec::encode(&params), "dispatching mocked request");
        let request = RequestRecord::new(verb, base, params, options.headers, options.payload);
        let response = ResponseRecord::from_spec(spec, request);
        self.history.push(response.clone());
        Ok(response)
    }

    /// Copy of the registered specs, in registration order.
    #[must_use]
    pub fn responses(&self) -> Vec<ResponseSpec> {
        self.registry.snapshot()
    }

    /// Copy of the returned-response history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<ResponseRecord> {
        self.history.snapshot()
    }

    /// Copy of the most recently returned response.
    #[must_use]
    pub fn last_response(&self) -> Option<ResponseRecord> {
        self.history.last().cloned()
    }

    /// History capacity (`0` = unbounded).
    #[must_use]
    pub fn request_q_depth(&self) -> usize {
        self.history.capacity()
    }

    /// Writes the current history as a YAML transcript.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if the transcript cannot be written.
    pub fn write_transcript(
        &self,
        path: impl Into<PathBuf>,
        name: impl Into<String>,
    ) -> Result<PathBuf, MockError> {
        Transcript::capture(name, &self.history).write(path)
    }
}

impl HttpClient for ResponseMocker {
    fn request(
        &mut self,
        verb: &str,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseRecord, MockError> {
        self.dispatch(verb, url, options)
    }
}
