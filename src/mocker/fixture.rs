//! YAML fixture files describing responses to register.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MockError;
use crate::registry::ResponseSpec;

/// A set of response specs loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    /// Optional human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Specs to register, in order.
    #[serde(default)]
    pub responses: Vec<ResponseSpec>,
}

impl Fixture {
    /// Parses a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if the text is not a valid fixture.
    pub fn from_yaml(yaml: &str) -> Result<Self, MockError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| MockError::Fixture(format!("Failed to parse fixture: {e}")))
    }

    /// Reads and parses a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MockError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MockError::Fixture(format!("Failed to read fixture {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            MockError::Fixture(format!("Failed to parse fixture {}: {e}", path.display()))
        })
    }
}
