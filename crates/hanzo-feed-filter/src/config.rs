//! Configuration for Hanzo Feed Filter
//!
//! A config file is a YAML mapping with two optional term lists:
//!
//! ```yaml
//! allowList:
//!   - tech
//! blockList:
//!   - sponsored
//! ```

use crate::error::{FilterError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Allow/block term lists for filtering feed items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Items must match at least one of these terms to be kept
    #[serde(
        default,
        alias = "allow_list",
        deserialize_with = "deserialize_terms",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_list: Option<Vec<String>>,
    /// Items matching any of these terms are dropped
    #[serde(
        default,
        alias = "block_list",
        deserialize_with = "deserialize_terms",
        skip_serializing_if = "Option::is_none"
    )]
    pub block_list: Option<Vec<String>>,
}

impl FilterConfig {
    /// Create an empty config (passes every item through)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allow-list
    pub fn with_allow_list<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Set the block-list
    pub fn with_block_list<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_list = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a config from YAML text.
    ///
    /// The document must be a mapping; unknown keys are ignored.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if !value.is_mapping() {
            return Err(FilterError::Config(
                "expected a mapping with allowList/blockList keys".to_string(),
            ));
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Load a config file, treating any problem as "no filtering".
    ///
    /// Returns `None` when the file does not exist, cannot be read, or does
    /// not hold a valid config mapping.
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, filtering disabled");
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config file, filtering disabled");
                return None;
            }
        };

        match Self::from_yaml_str(&content) {
            Ok(config) => {
                debug!(
                    path = %path.display(),
                    allow_terms = config.allow_list.as_ref().map_or(0, Vec::len),
                    block_terms = config.block_list.as_ref().map_or(0, Vec::len),
                    "loaded filter config"
                );
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config file, filtering disabled");
                None
            }
        }
    }

    /// True when neither list holds a usable term
    pub fn is_neutral(&self) -> bool {
        !has_terms(self.allow_list.as_deref()) && !has_terms(self.block_list.as_deref())
    }
}

/// Whether a term list contains at least one non-blank term
pub(crate) fn has_terms(terms: Option<&[String]>) -> bool {
    terms.is_some_and(|terms| terms.iter().any(|t| !t.trim().is_empty()))
}

/// Accept scalar list entries (`- 2024`, `- true`) as terms, not only strings
fn deserialize_terms<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let values: Option<Vec<serde_yaml::Value>> = Option::deserialize(deserializer)?;
    let Some(values) = values else {
        return Ok(None);
    };

    values
        .into_iter()
        .map(|value| match value {
            serde_yaml::Value::String(s) => Ok(s),
            serde_yaml::Value::Number(n) => Ok(n.to_string()),
            serde_yaml::Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!(
                "term must be a scalar, got {:?}",
                other
            ))),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Some)
}
