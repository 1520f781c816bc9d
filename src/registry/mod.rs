//! Registry of response specs and request matching.
//!
//! Matching is tiered. Specs whose parameters equal the request's merged
//! parameters are consulted first; wildcard specs (no parameters) only answer
//! when no such spec exists. Within a tier, more than one candidate is always
//! an ambiguity error and no candidate is ever preferred by position.

pub mod spec;

pub use spec::{ResponseSpec, StatusCode};

use tracing::{debug, warn};

use crate::codec::{self, Params};
use crate::error::MockError;

/// Ordered collection of registered specs.
#[derive(Debug, Default)]
pub struct Registry {
    specs: Vec<ResponseSpec>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `spec` after folding any query string into its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::DuplicateRegistration`] when a registered spec
    /// shares the url, at least one verb and an equal parameter set.
    pub fn register(&mut self, spec: ResponseSpec) -> Result<(), MockError> {
        let spec = spec.normalized();
        if let Some(existing) = self.specs.iter().find(|existing| existing.collides_with(&spec)) {
            return Err(MockError::DuplicateRegistration {
                message: format!("Response already registered: {existing} (attempted {spec})"),
            });
        }
        debug!(spec = %spec, "registered response");
        self.specs.push(spec);
        Ok(())
    }

    /// Appends `spec` without the duplicate check.
    pub fn force_register(&mut self, spec: ResponseSpec) {
        let spec = spec.normalized();
        debug!(spec = %spec, "force-registered response");
        self.specs.push(spec);
    }

    /// Finds the single spec answering `verb` on `url` with `params`.
    ///
    /// `url` must already be stripped of its query string.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::UnregisteredUrl`] when nothing matches and
    /// [`MockError::AmbiguousUrlMatch`] when a tier holds several candidates.
    pub fn find_match(
        &self,
        verb: &str,
        url: &str,
        params: &Params,
    ) -> Result<&ResponseSpec, MockError> {
        let routed: Vec<&ResponseSpec> =
            self.specs.iter().filter(|spec| spec.url == url && spec.answers(verb)).collect();

        let exact: Vec<&ResponseSpec> = routed
            .iter()
            .copied()
            .filter(|spec| !spec.is_wildcard() && codec::params_equal(&spec.url_params, params))
            .collect();
        let candidates = if exact.is_empty() {
            routed.into_iter().filter(|spec| spec.is_wildcard()).collect()
        } else {
            exact
        };

        let requested = codec::join_url(url, params);
        match candidates.as_slice() {
            [] => {
                warn!(verb, url = %requested, "no registered response");
                Err(MockError::UnregisteredUrl {
                    message: format!("No response registered for {verb} {requested}"),
                })
            }
            [only] => Ok(*only),
            many => {
                warn!(verb, url = %requested, candidates = many.len(), "ambiguous response match");
                let listed: Vec<String> = many.iter().map(ToString::to_string).collect();
                Err(MockError::AmbiguousUrlMatch {
                    message: format!(
                        "{} registered responses match {verb} {requested}: {}",
                        many.len(),
                        listed.join(", ")
                    ),
                })
            }
        }
    }

    /// Removes every registered spec.
    pub fn clear(&mut self) {
        self.specs.clear();
    }

    /// Number of registered specs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Copy of the registered specs, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ResponseSpec> {
        self.specs.clone()
    }
}
