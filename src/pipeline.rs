//! The refinement pipeline tying all stages together.
//!
//! # Architecture
//!
//! [`Tokenizer`] applies processing in this order:
//!
//! 1. Normalizer: character-level cleanup of the raw text
//! 2. Analyzer: morphological segmentation into tagged morphemes
//! 3. Combiner: repair of known mis-splits
//! 4. Validator + Rewriter: per-morpheme filtering and surface rewriting
//!
//! The analyzer is a trait object; everything else is rule data frozen at
//! construction, so one `Tokenizer` is immutable, cheap to clone, and safe
//! to share across threads.
//!
//! # Examples
//!
//! ```
//! use malche::pipeline::Tokenizer;
//!
//! let tokenizer = Tokenizer::default(); // script-based analyzer
//!
//! let tokens = tokenizer.get_tokens("아름다운 샛별!!");
//! assert_eq!(tokens, vec!["아름다운", "샛별"]);
//!
//! // Empty and all-noise inputs yield no tokens.
//! assert!(tokenizer.get_tokens("").is_empty());
//! ```

use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::analyzer::{MorphAnalyzer, SimpleAnalyzer};
use crate::morpheme::Morpheme;
use crate::normalizer::TextNormalizer;
use crate::refine::{MorphCombiner, RefineConfig, TokenRewriter, TokenValidator};

/// The full text-to-tokens pipeline.
///
/// `get_tokens` keeps every morpheme that survives validation; `get_nouns`
/// additionally requires a noun-bearing tag. Both return tokens in the
/// order their source morphemes appeared.
#[derive(Clone)]
pub struct Tokenizer {
    normalizer: TextNormalizer,
    analyzer: Arc<dyn MorphAnalyzer>,
    combiner: MorphCombiner,
    validator: TokenValidator,
    rewriter: TokenRewriter,
}

impl Tokenizer {
    /// Create a pipeline around the given analyzer, with default
    /// normalization and the embedded refinement rules.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        Tokenizer {
            normalizer: TextNormalizer::new(),
            analyzer,
            combiner: MorphCombiner::new(),
            validator: TokenValidator::new(),
            rewriter: TokenRewriter::new(),
        }
    }

    /// Create a pipeline backed by the embedded mecab-ko-dic dictionary.
    #[cfg(feature = "ko-dic")]
    pub fn ko_dic() -> crate::error::Result<Self> {
        use crate::analyzer::LinderaAnalyzer;
        Ok(Self::new(Arc::new(LinderaAnalyzer::new()?)))
    }

    /// Replace the refinement rules with the given configuration.
    pub fn with_config(mut self, config: RefineConfig) -> Self {
        self.combiner = MorphCombiner::with_table(config.combine);
        self.validator = TokenValidator::with_rules(config.validity);
        self.rewriter = TokenRewriter::with_rules(config.rewrite);
        self
    }

    /// Replace the text normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The analyzer backing this pipeline.
    pub fn analyzer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.analyzer
    }

    /// The normalizer applied before analysis.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Extract every valid token from the text.
    pub fn get_tokens(&self, text: &str) -> Vec<String> {
        self.run(text, false)
    }

    /// Extract the noun tokens from the text.
    pub fn get_nouns(&self, text: &str) -> Vec<String> {
        self.run(text, true)
    }

    fn run(&self, text: &str, noun_only: bool) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let morphs: Vec<Morpheme> = match self.analyzer.analyze(&normalized) {
            Ok(stream) => stream.collect(),
            Err(e) => {
                // Degraded mode: the normalized text itself is the one token
                // we can still vouch for.
                warn!(
                    "analyzer '{}' failed, falling back to the normalized text: {}",
                    self.analyzer.name(),
                    e
                );
                return vec![normalized];
            }
        };

        let combined = self.combiner.combine(morphs);

        let mut tokens = Vec::with_capacity(combined.len());
        for morpheme in &combined {
            if !self.validator.is_valid(morpheme, noun_only) {
                continue;
            }
            let token = self.rewriter.rewrite(&morpheme.surface);
            if !token.is_empty() {
                tokens.push(token);
            }
        }

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(SimpleAnalyzer::new()))
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("analyzer", &self.analyzer.name())
            .field("normalizer", self.normalizer.config())
            .finish()
    }
}
