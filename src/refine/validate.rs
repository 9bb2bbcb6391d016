//! Token validator implementation.
//!
//! The validator decides whether a refined morpheme survives into the output
//! token list. It chains several criteria over the surface and tag: an
//! always-valid override set, forbidden word-final suffixes, a length
//! ceiling, stoplists for Korean and English, standalone-jamo rejection, an
//! optional noun-only tag gate, and a script check that confines surfaces to
//! Korean and lowercase Latin unless the tag marks a foreign word or hanja.
//!
//! Rule order is part of the contract: the override set short-circuits
//! everything after it, and in noun-only mode the tag gate runs before the
//! foreign-word rules.
//!
//! # Examples
//!
//! ```
//! use malche::morpheme::{Morpheme, MorphTag};
//! use malche::refine::TokenValidator;
//!
//! let validator = TokenValidator::new();
//!
//! let noun = Morpheme::new("강아지", MorphTag::CommonNoun, 0);
//! let particle = Morpheme::new("는", MorphTag::AuxiliaryParticle, 1);
//!
//! assert!(validator.is_valid(&noun, true));
//! assert!(!validator.is_valid(&particle, true));
//! // In all-tags mode the particle passes; only noun-only filters on tag.
//! assert!(validator.is_valid(&particle, false));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::morpheme::{MorphKind, MorphTag, Morpheme};

/// Default always-valid overrides: short Latin terms the foreign-word length
/// rule would otherwise reject.
const DEFAULT_VALID_WORDS: &[&str] = &["ai", "ml", "db", "os", "ui", "ux"];

/// Default forbidden word-final suffixes. A surface ending in one of these
/// is an unsplit predicate or politeness ending, not a token.
const DEFAULT_STOP_SUFFIXES: &[&str] = &["습니다", "입니다", "세요", "에요", "는데요", "군요"];

/// Default Korean stop words.
///
/// Bound nouns and fillers that carry no topical meaning on their own.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "것", "수", "등", "들", "및", "때", "뭐", "거", "저희", "경우", "다음", "우리",
];

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default noun-bearing tags: the tags `get_nouns` keeps.
const DEFAULT_NOUN_TAGS: &[MorphTag] = &[
    MorphTag::CommonNoun,
    MorphTag::ProperNoun,
    MorphTag::DependentNoun,
    MorphTag::UnitNoun,
    MorphTag::Numeral,
    MorphTag::Pronoun,
    MorphTag::Root,
    MorphTag::Foreign,
    MorphTag::Hanja,
    MorphTag::Number,
];

/// Default word length ceiling in chars; a surface this long or longer is
/// analyzer garbage, not a word.
const DEFAULT_MAX_WORD_CHARS: usize = 15;

/// Default Korean stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Tags whose surfaces are exempt from the Korean/Latin script rule.
const SCRIPT_EXEMPT_TAGS: [MorphTag; 2] = [MorphTag::Foreign, MorphTag::Hanja];

fn default_valid_words() -> HashSet<String> {
    DEFAULT_VALID_WORDS.iter().map(|&s| s.to_string()).collect()
}

fn default_stop_suffixes() -> Vec<String> {
    DEFAULT_STOP_SUFFIXES.iter().map(|&s| s.to_string()).collect()
}

fn default_max_word_chars() -> usize {
    DEFAULT_MAX_WORD_CHARS
}

fn default_stop_words() -> HashSet<String> {
    DEFAULT_STOP_WORDS_SET.clone()
}

// The full compatibility jamo block: a surface containing any of these is
// laughter or a fragment, never a word.
fn default_jamo_chars() -> HashSet<char> {
    ('\u{3131}'..='\u{3163}').collect()
}

fn default_noun_tags() -> HashSet<MorphTag> {
    DEFAULT_NOUN_TAGS.iter().copied().collect()
}

fn default_english_stop_words() -> HashSet<String> {
    DEFAULT_ENGLISH_STOP_WORDS_SET.clone()
}

/// Characters a surface may consist of under the script rule.
fn is_token_char(c: char) -> bool {
    matches!(c, '\u{3131}'..='\u{3163}' | '\u{AC00}'..='\u{D7A3}' | 'a'..='z')
}

/// The rule data consulted by [`TokenValidator`].
///
/// Every field has an embedded default and can be replaced wholesale, either
/// in code or through the JSON rule file. Fields absent from a rule file
/// keep their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidityRules {
    /// Surfaces that are always valid, before any other rule runs.
    #[serde(default = "default_valid_words")]
    pub valid_words: HashSet<String>,
    /// Word-final suffixes that invalidate a surface.
    #[serde(default = "default_stop_suffixes")]
    pub stop_suffixes: Vec<String>,
    /// Surfaces with at least this many chars are invalid.
    #[serde(default = "default_max_word_chars")]
    pub max_word_chars: usize,
    /// Korean stoplist.
    #[serde(default = "default_stop_words")]
    pub stop_words: HashSet<String>,
    /// Standalone jamo: any surface containing one is invalid.
    #[serde(default = "default_jamo_chars")]
    pub jamo_chars: HashSet<char>,
    /// Tags that count as noun-bearing in noun-only mode.
    #[serde(default = "default_noun_tags")]
    pub noun_tags: HashSet<MorphTag>,
    /// English stoplist, matched case-insensitively against `SL` surfaces.
    #[serde(default = "default_english_stop_words")]
    pub english_stop_words: HashSet<String>,
}

impl Default for ValidityRules {
    fn default() -> Self {
        ValidityRules {
            valid_words: default_valid_words(),
            stop_suffixes: default_stop_suffixes(),
            max_word_chars: default_max_word_chars(),
            stop_words: default_stop_words(),
            jamo_chars: default_jamo_chars(),
            noun_tags: default_noun_tags(),
            english_stop_words: default_english_stop_words(),
        }
    }
}

/// Decides whether a morpheme survives refinement.
///
/// Synthesized morphemes always pass (the combiner vouches for them) and
/// suppressed placeholders never do; analyzed morphemes go through the rule
/// chain documented at the module level.
#[derive(Clone, Debug, Default)]
pub struct TokenValidator {
    rules: Arc<ValidityRules>,
}

impl TokenValidator {
    /// Create a validator with the default embedded rules.
    pub fn new() -> Self {
        Self::with_rules(ValidityRules::default())
    }

    /// Create a validator with the given rules.
    pub fn with_rules(rules: ValidityRules) -> Self {
        TokenValidator {
            rules: Arc::new(rules),
        }
    }

    /// The rule data backing this validator.
    pub fn rules(&self) -> &ValidityRules {
        &self.rules
    }

    /// Check whether the morpheme survives. With `noun_only`, surfaces whose
    /// tag is not in the noun-bearing set are rejected as well.
    pub fn is_valid(&self, morpheme: &Morpheme, noun_only: bool) -> bool {
        let tag = match morpheme.kind {
            MorphKind::Suppressed => return false,
            MorphKind::Synthesized => return true,
            MorphKind::Analyzed(tag) => tag,
        };
        let word = morpheme.surface.as_str();
        let rules = &self.rules;

        // Overrides short-circuit the whole chain.
        if rules.valid_words.contains(word) {
            return true;
        }

        if rules
            .stop_suffixes
            .iter()
            .any(|suffix| word.ends_with(suffix.as_str()))
        {
            return false;
        }
        if morpheme.char_len() >= rules.max_word_chars {
            return false;
        }
        if rules.stop_words.contains(word) {
            return false;
        }
        if word.chars().any(|c| rules.jamo_chars.contains(&c)) {
            return false;
        }
        if noun_only && !rules.noun_tags.contains(&tag) {
            return false;
        }
        if tag == MorphTag::Foreign {
            if rules.english_stop_words.contains(&word.to_lowercase()) {
                return false;
            }
            if morpheme.char_len() <= 2 {
                return false;
            }
        }
        if !SCRIPT_EXEMPT_TAGS.contains(&tag) && !word.chars().all(is_token_char) {
            return false;
        }

        true
    }
}
