//! Token rewriter implementation.
//!
//! Surviving tokens still carry derivational baggage: 하다/되다 predicates
//! that should index as their stem, and variant spellings of the same term.
//! The rewriter strips one configured suffix (list order decides which) and
//! then maps the result through an alias table.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default suffixes to strip, in priority order.
///
/// Adjective endings the combiner restores (답다, 롭다) must stay out of
/// this list, or stripping would undo the repair.
const DEFAULT_STRIP_SUFFIXES: &[&str] = &["스럽다", "하다", "되다", "지다"];

/// Default alias map: variant spelling -> canonical form.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("어플", "앱"),
    ("깃헙", "깃허브"),
    ("파이선", "파이썬"),
    ("머신런닝", "머신러닝"),
    ("텐서플로우", "텐서플로"),
];

fn default_strip_suffixes() -> Vec<String> {
    DEFAULT_STRIP_SUFFIXES.iter().map(|&s| s.to_string()).collect()
}

fn default_aliases() -> HashMap<String, String> {
    DEFAULT_ALIASES
        .iter()
        .map(|&(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect()
}

/// The rule data consulted by [`TokenRewriter`].
///
/// `strip_suffixes` is ordered: the first entry the word ends with is the
/// one stripped, regardless of which suffix is longer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RewriteRules {
    /// Suffixes to strip once, first match in list order.
    #[serde(default = "default_strip_suffixes")]
    pub strip_suffixes: Vec<String>,
    /// Alias substitutions applied after stripping.
    #[serde(default = "default_aliases")]
    pub aliases: HashMap<String, String>,
}

impl Default for RewriteRules {
    fn default() -> Self {
        RewriteRules {
            strip_suffixes: default_strip_suffixes(),
            aliases: default_aliases(),
        }
    }
}

/// Rewrites token surfaces: one suffix strip, then alias substitution.
///
/// The rewriter never drops a token; an empty result (possible when an alias
/// maps to the empty string) is passed through for the caller to filter.
///
/// # Examples
///
/// ```
/// use malche::refine::TokenRewriter;
///
/// let rewriter = TokenRewriter::new();
///
/// assert_eq!(rewriter.rewrite("시작하다"), "시작");
/// assert_eq!(rewriter.rewrite("어플"), "앱");
/// // A word that *is* a suffix is left alone.
/// assert_eq!(rewriter.rewrite("하다"), "하다");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenRewriter {
    rules: Arc<RewriteRules>,
}

impl TokenRewriter {
    /// Create a rewriter with the default embedded rules.
    pub fn new() -> Self {
        Self::with_rules(RewriteRules::default())
    }

    /// Create a rewriter with the given rules.
    pub fn with_rules(rules: RewriteRules) -> Self {
        TokenRewriter {
            rules: Arc::new(rules),
        }
    }

    /// The rule data backing this rewriter.
    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    /// Rewrite a token surface.
    pub fn rewrite(&self, word: &str) -> String {
        let stripped = self.strip_once(word);
        match self.rules.aliases.get(stripped) {
            Some(canonical) => canonical.clone(),
            None => stripped.to_string(),
        }
    }

    /// Strip the first configured suffix the word ends with, unless the word
    /// is nothing but that suffix.
    fn strip_once<'a>(&self, word: &'a str) -> &'a str {
        for suffix in &self.rules.strip_suffixes {
            if word != suffix.as_str() {
                if let Some(stem) = word.strip_suffix(suffix.as_str()) {
                    return stem;
                }
            }
        }
        word
    }
}
