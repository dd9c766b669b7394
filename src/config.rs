//! Client side settings, as served to the browser in `settings.json`
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ROUTE: &str = "conwaylife";

/// Where the board endpoints live. Other keys in the document are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// base address of the board service
    #[serde(rename = "ConwayWebAPI")]
    pub conway_web_api: String,
}

/// Failures while loading [`ClientSettings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[allow(missing_docs)]
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[allow(missing_docs)]
    #[error("settings do not name a ConwayWebAPI base address")]
    MissingApiBase,
}

impl ClientSettings {
    #[allow(missing_docs)]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    #[allow(missing_docs)]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        serde_json::from_reader::<_, Self>(reader)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.conway_web_api.trim().is_empty() {
            Err(ConfigError::MissingApiBase)
        } else {
            Ok(self)
        }
    }

    /// the base address without a trailing slash
    pub fn api_base(&self) -> &str {
        self.conway_web_api.trim().trim_end_matches('/')
    }

    /// address to GET the pattern called `name` from
    pub fn pattern_path(&self, name: &str) -> String {
        format!("{}/{}/{}", self.api_base(), ROUTE, name)
    }

    /// address to POST a board to for its next generation
    pub fn next_generation_path(&self) -> String {
        format!("{}/{}", self.api_base(), ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_fixture() {
        let settings =
            ClientSettings::from_json(include_str!("../fixtures/settings.json")).unwrap();
        assert_eq!(settings.api_base(), "https://localhost:5003");
        assert_eq!(
            settings.pattern_path("Glider"),
            "https://localhost:5003/conwaylife/Glider"
        );
        assert_eq!(
            settings.next_generation_path(),
            "https://localhost:5003/conwaylife"
        );
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"ConwayWebAPI":"http://api.local"}"#;
        let settings = ClientSettings::from_reader(&json[..]).unwrap();
        assert_eq!(settings.pattern_path("x"), "http://api.local/conwaylife/x");
    }

    #[test]
    fn test_missing_base() {
        assert!(matches!(
            ClientSettings::from_json(r#"{"ConwayWebAPI":"  "}"#),
            Err(ConfigError::MissingApiBase)
        ));
        assert!(matches!(
            ClientSettings::from_json(r#"{"Logging":{}}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
