//! Mocker configuration.

use std::env;

use tracing::warn;

use crate::error::MockError;

/// Environment variable holding the history capacity.
pub const Q_DEPTH_ENV: &str = "RESPONSE_MOCKER_Q_DEPTH";

/// Settings fixed at mocker construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockerConfig {
    /// History capacity; `0` keeps every returned response.
    pub request_q_depth: usize,
}

impl MockerConfig {
    /// Config with the given history capacity.
    #[must_use]
    pub fn with_q_depth(request_q_depth: usize) -> Self {
        Self { request_q_depth }
    }

    /// Reads the config from the environment, loading `.env` if present.
    ///
    /// A `.env` file that exists but cannot be parsed is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Config`] if the capacity is not a non-negative
    /// integer.
    pub fn from_env() -> Result<Self, MockError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                warn!(error = %err, "failed to load .env file");
            }
        }
        Self::from_value(env::var(Q_DEPTH_ENV).ok().as_deref())
    }

    /// Parses the capacity from an optional raw value.
    fn from_value(raw: Option<&str>) -> Result<Self, MockError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        let request_q_depth = raw.parse::<usize>().map_err(|e| {
            MockError::Config(format!("{Q_DEPTH_ENV}={raw:?} is not a valid depth: {e}"))
        })?;
        Ok(Self { request_q_depth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(MockerConfig::default().request_q_depth, 0);
    }

    #[test]
    fn missing_or_blank_value_uses_default() {
        assert_eq!(MockerConfig::from_value(None).unwrap(), MockerConfig::default());
        assert_eq!(MockerConfig::from_value(Some("  ")).unwrap(), MockerConfig::default());
    }

    #[test]
    fn parses_depth() {
        assert_eq!(MockerConfig::from_value(Some(" 5 ")).unwrap(), MockerConfig::with_q_depth(5));
    }

    #[test]
    fn rejects_non_numeric_depth() {
        let err = MockerConfig::from_value(Some("five")).unwrap_err();
        assert!(matches!(err, MockError::Config(_)));
        assert!(err.to_string().contains(Q_DEPTH_ENV));
    }
}
