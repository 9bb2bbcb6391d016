//! Character-level text normalization applied before morphological analysis.
//!
//! The normalizer prepares raw text for segmentation: trims and lowercases,
//! removes emoji, strips everything outside the Korean/Latin/digit repertoire,
//! and collapses whitespace runs. Each step can be switched off through
//! [`NormalizerConfig`].
//!
//! # Examples
//!
//! ```
//! use malche::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new();
//! let cleaned = normalizer.normalize("@%!@$% 아름다운 개는 짖는다.");
//! assert_eq!(cleaned, "아름다운 개는 짖는다");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Emoticons, symbols & pictographs, transport & map symbols, flags.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{1F300}-\u{1F5FF}\u{1F600}-\u{1F64F}\u{1F680}-\u{1F6FF}\u{1F1E0}-\u{1F1FF}]+")
        .expect("emoji pattern is valid")
});

// Keep: space, compatibility jamo, Hangul syllables, Latin letters, digits,
// and the colon (emoticon shorthand like ":)" has it stripped, but times and
// ratios keep theirs).
static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^ ㄱ-ㅣ가-힣a-zA-Z0-9:]+").expect("special-char pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Configuration flags for [`TextNormalizer`]. All steps default to on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Lowercase the input.
    pub lowercase: bool,
    /// Replace emoji runs with a space.
    pub strip_emoji: bool,
    /// Replace runs of characters outside the Korean/Latin/digit/colon
    /// repertoire with a space.
    pub strip_special_chars: bool,
    /// Collapse whitespace runs to a single space and trim the ends.
    pub collapse_whitespace: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            lowercase: true,
            strip_emoji: true,
            strip_special_chars: true,
            collapse_whitespace: true,
        }
    }
}

/// Normalizes raw text ahead of the analyzer.
///
/// A pure function over its input: the same text and configuration always
/// produce the same output. The patterns are compiled once per process.
///
/// # Examples
///
/// ```
/// use malche::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let keep_case = TextNormalizer::with_config(NormalizerConfig {
///     lowercase: false,
///     ..NormalizerConfig::default()
/// });
/// assert_eq!(keep_case.normalize("Rust 좋아요!!"), "Rust 좋아요");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Create a normalizer with the default configuration (all steps on).
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer with the given configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        TextNormalizer { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize the given text.
    pub fn normalize(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if self.config.lowercase {
            text = text.to_lowercase();
        }
        if self.config.strip_emoji {
            text = EMOJI.replace_all(&text, " ").into_owned();
        }
        if self.config.strip_special_chars {
            text = SPECIAL_CHARS.replace_all(&text, " ").into_owned();
        }
        if self.config.collapse_whitespace {
            text = WHITESPACE.replace_all(&text, " ").trim().to_string();
        }

        text
    }
}

/// Split text into spans of at most `max_chars` Unicode scalar values.
///
/// Long documents should be chunked before analysis to bound per-call latency;
/// the pipeline itself never imposes a limit, so chunking stays in the
/// caller's hands. Splits are character-safe but not word-aware.
///
/// # Examples
///
/// ```
/// use malche::normalizer::chunks;
///
/// assert_eq!(chunks("가나다라마", 2), vec!["가나", "다라", "마"]);
/// assert!(chunks("", 1000).is_empty());
/// ```
pub fn chunks(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 || text.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_chars {
            spans.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        spans.push(current);
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_normalization() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.normalize("  @%!@$% 아름다운 개는 짖는다. 사람은 밥을 먹는다.  ");
        assert_eq!(cleaned, "아름다운 개는 짖는다 사람은 밥을 먹는다");
    }

    #[test]
    fn test_lowercase_and_digits_kept() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Rust 2024 버전!"), "rust 2024 버전");
    }

    #[test]
    fn test_colon_is_kept() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("오후 3:30 회의"), "오후 3:30 회의");
    }

    #[test]
    fn test_emoji_removed() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("좋아요 \u{1F600}\u{1F680} 최고"), "좋아요 최고");
    }

    #[test]
    fn test_standalone_jamo_survive_normalization() {
        // Jamo are stripped later by the validator, not by the char filter.
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("ㅋㅋㅋ 재밌다"), "ㅋㅋㅋ 재밌다");
    }

    #[test]
    fn test_steps_can_be_disabled() {
        let normalizer = TextNormalizer::with_config(NormalizerConfig {
            lowercase: false,
            strip_special_chars: false,
            ..NormalizerConfig::default()
        });
        assert_eq!(normalizer.normalize("Hello, 세계!"), "Hello, 세계!");
    }

    #[test]
    fn test_whitespace_collapse_only_when_enabled() {
        let normalizer = TextNormalizer::with_config(NormalizerConfig {
            collapse_whitespace: false,
            ..NormalizerConfig::default()
        });
        let cleaned = normalizer.normalize("가!!나");
        assert_eq!(cleaned, "가 나"); // the strip replaced the run with one space
        let spaced = normalizer.normalize("가  나");
        assert_eq!(spaced, "가  나"); // but existing runs stay
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   "), "");
    }

    #[test]
    fn test_chunks_char_boundaries() {
        let spans = chunks("아름다운개는짖는다", 4);
        assert_eq!(spans, vec!["아름다운", "개는짖는", "다"]);
    }

    #[test]
    fn test_chunks_exact_fit_and_empty() {
        assert_eq!(chunks("abcd", 2), vec!["ab", "cd"]);
        assert!(chunks("", 3000).is_empty());
        assert!(chunks("abc", 0).is_empty());
    }
}
