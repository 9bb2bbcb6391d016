//! Morphological analyzer backends.
//!
//! An analyzer segments normalized text into tagged morphemes. The pipeline
//! treats the backend as a black box behind [`MorphAnalyzer`]: any segmenter
//! that can produce a [`MorphemeStream`] plugs in, and everything downstream
//! (combine, validate, rewrite) stays the same.

use crate::error::Result;
use crate::morpheme::MorphemeStream;

/// Trait for analyzers that segment text into tagged morphemes.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze the given text into a stream of tagged morphemes.
    ///
    /// Morphemes must come back in surface order with ascending positions.
    /// An `Err` here does not abort the pipeline; callers degrade to treating
    /// the whole input as a single token.
    fn analyze(&self, text: &str) -> Result<MorphemeStream>;

    /// Get the name of this analyzer (for debugging and log output).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
#[cfg(feature = "ko-dic")]
pub mod lindera;
pub mod simple;

// Re-export all analyzers for convenient access
#[cfg(feature = "ko-dic")]
pub use lindera::LinderaAnalyzer;
pub use simple::SimpleAnalyzer;
