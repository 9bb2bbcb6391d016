//! Script-based analyzer implementation.

use super::MorphAnalyzer;

use crate::error::Result;
use crate::morpheme::{MorphTag, Morpheme, MorphemeStream};

/// An analyzer that splits on whitespace and tags each word by its script.
///
/// This backend performs no dictionary lookup: every whitespace-separated
/// word becomes exactly one morpheme, tagged `NNG` when all-Hangul, `SL`
/// when all-Latin, `SN` when all-digit, `SH` when all-hanja, and `UNK`
/// otherwise. Treating every Hangul word as a common noun is deliberately
/// naive; it keeps the refinement stages exercisable in environments where
/// no dictionary backend is available.
#[derive(Clone, Debug, Default)]
pub struct SimpleAnalyzer;

impl SimpleAnalyzer {
    /// Create a new script-based analyzer.
    pub fn new() -> Self {
        SimpleAnalyzer
    }

    /// Tag a word by the script of its characters.
    fn classify(word: &str) -> MorphTag {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return MorphTag::Number;
        }

        // Hangul syllables and compatibility jamo
        if word
            .chars()
            .all(|c| matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{3163}'))
        {
            return MorphTag::CommonNoun;
        }

        if word.chars().all(|c| c.is_ascii_alphabetic()) {
            return MorphTag::Foreign;
        }

        // CJK Unified Ideographs and Extension A
        if word
            .chars()
            .all(|c| matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'))
        {
            return MorphTag::Hanja;
        }

        MorphTag::Unknown
    }
}

impl MorphAnalyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Result<MorphemeStream> {
        let mut morphemes = Vec::new();
        let mut position = 0;
        let mut word_start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = word_start.take() {
                    let word = &text[start..idx];
                    morphemes.push(Morpheme::with_offsets(
                        word,
                        Self::classify(word),
                        position,
                        start,
                        idx,
                    ));
                    position += 1;
                }
            } else if word_start.is_none() {
                word_start = Some(idx);
            }
        }
        if let Some(start) = word_start {
            let word = &text[start..];
            morphemes.push(Morpheme::with_offsets(
                word,
                Self::classify(word),
                position,
                start,
                text.len(),
            ));
        }

        Ok(Box::new(morphemes.into_iter()))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
