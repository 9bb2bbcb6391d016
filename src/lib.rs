//! # Malche
//!
//! Korean token refinement: morphological post-processing and noun
//! extraction.
//!
//! ## Features
//!
//! - Character-level text normalization (lowercasing, emoji and
//!   special-character stripping, whitespace collapse)
//! - Pluggable morphological analyzers behind one trait, with an optional
//!   mecab-ko-dic backend (`ko-dic` feature)
//! - Rule-based repair of mis-split compounds
//! - Multi-rule token validation with a noun-only mode
//! - Suffix stripping and alias canonicalization
//! - JSON-loadable rule files with embedded defaults

pub mod analyzer;
pub mod error;
pub mod morpheme;
pub mod normalizer;
pub mod pipeline;
pub mod refine;

pub mod prelude {
    //! Convenient glob import of the common types.

    pub use crate::analyzer::{MorphAnalyzer, SimpleAnalyzer};
    #[cfg(feature = "ko-dic")]
    pub use crate::analyzer::LinderaAnalyzer;
    pub use crate::error::{MalcheError, Result};
    pub use crate::morpheme::{MorphKind, MorphTag, Morpheme, MorphemeStream};
    pub use crate::normalizer::{NormalizerConfig, TextNormalizer, chunks};
    pub use crate::pipeline::Tokenizer;
    pub use crate::refine::{
        CombineTable, MorphCombiner, RefineConfig, RewriteRules, TokenRewriter, TokenValidator,
        ValidityRules,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
