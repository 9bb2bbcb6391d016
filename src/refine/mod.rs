//! Rule-based refinement of analyzed morpheme streams.
//!
//! Refinement runs in three stages, each with its own rule data:
//!
//! 1. [`MorphCombiner`] rewrites windows of mis-split morphemes into single
//!    synthesized morphemes ([`CombineTable`]);
//! 2. [`TokenValidator`] decides which morphemes survive
//!    ([`ValidityRules`]);
//! 3. [`TokenRewriter`] strips derivational suffixes and canonicalizes
//!    variant spellings ([`RewriteRules`]).
//!
//! [`RefineConfig`] bundles the three rule sets. The embedded defaults give
//! a usable general-purpose setup; domain deployments replace them through
//! a JSON rule file.
//!
//! # Examples
//!
//! ```
//! use malche::refine::RefineConfig;
//!
//! let config = RefineConfig::default();
//! assert!(!config.combine.is_empty());
//! assert!(config.validity.stop_words.contains("것"));
//! ```

// Individual stage modules
pub mod combine;
pub mod rewrite;
pub mod validate;

// Re-export the stages and their rule types for convenient access
pub use combine::{CombineTable, MorphCombiner};
pub use rewrite::{RewriteRules, TokenRewriter};
pub use validate::{TokenValidator, ValidityRules};

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MalcheError, Result};

/// The rule data for a full refinement pass: combine, validity, rewrite.
///
/// Serializes as a JSON object with `combine`, `validity`, and `rewrite`
/// keys; keys absent from a rule file keep their embedded defaults, so a
/// file can override a single rule set (or a single field of one) without
/// restating the rest.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineConfig {
    /// Combine rules for the morph combiner.
    pub combine: CombineTable,
    /// Validity rules for the token validator.
    pub validity: ValidityRules,
    /// Rewrite rules for the token rewriter.
    pub rewrite: RewriteRules,
}

impl RefineConfig {
    /// Load rule data from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MalcheError::config(format!("Failed to read rule file '{}': {}", path.display(), e))
        })?;

        let config: RefineConfig = serde_json::from_str(&content).map_err(|e| {
            MalcheError::config(format!(
                "Failed to parse rule file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "loaded rule file '{}': {} combine rules, {} stop words, {} aliases",
            path.display(),
            config.combine.len(),
            config.validity.stop_words.len(),
            config.rewrite.aliases.len()
        );
        Ok(config)
    }

    /// Write rule data to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_carries_embedded_rules() {
        let config = RefineConfig::default();

        assert!(!config.combine.is_empty());
        assert_eq!(config.validity.max_word_chars, 15);
        assert!(config.rewrite.strip_suffixes.contains(&"하다".to_string()));
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: RefineConfig = serde_json::from_str("{}").unwrap();

        assert!(!config.combine.is_empty());
        assert!(config.validity.stop_words.contains("것"));
    }

    #[test]
    fn test_partial_json_overrides_one_rule_set() {
        let json = r#"{
            "combine": [{"parts": ["튜링", "머신"], "into": "튜링머신"}],
            "validity": {"max_word_chars": 10}
        }"#;
        let config: RefineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.combine.len(), 1);
        assert_eq!(config.validity.max_word_chars, 10);
        // Untouched fields and rule sets keep their defaults.
        assert!(config.validity.stop_words.contains("것"));
        assert_eq!(config.rewrite.aliases.get("어플"), Some(&"앱".to_string()));
    }

    #[test]
    fn test_from_json_file_missing_path() {
        let err = RefineConfig::from_json_file("/no/such/rules.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/rules.json"));
    }
}
