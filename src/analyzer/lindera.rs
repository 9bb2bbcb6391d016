use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

use crate::error::{MalcheError, Result};
use crate::morpheme::{MorphTag, Morpheme, MorphemeStream};

use super::MorphAnalyzer;

/// A morphological analyzer backed by lindera with the mecab-ko-dic
/// dictionary.
///
/// Each dictionary token becomes one [`Morpheme`]; the first feature column
/// of the dictionary entry is the POS code and maps onto [`MorphTag`] via
/// [`MorphTag::from_pos`]. Out-of-vocabulary tokens come back as `UNK` and
/// map to [`MorphTag::Unknown`].
pub struct LinderaAnalyzer {
    inner: Tokenizer,
}

impl LinderaAnalyzer {
    /// Create an analyzer using the embedded mecab-ko-dic dictionary.
    pub fn new() -> Result<Self> {
        Self::with_dictionary("embedded://ko-dic")
    }

    /// Create an analyzer for the given lindera dictionary URI.
    pub fn with_dictionary(dict_uri: &str) -> Result<Self> {
        let dict = load_dictionary(dict_uri)
            .map_err(|e| MalcheError::analysis(format!("Failed to load dictionary: {}", e)))?;
        let segmenter = Segmenter::new(Mode::Normal, dict, None);

        Ok(Self {
            inner: Tokenizer::new(segmenter),
        })
    }
}

impl MorphAnalyzer for LinderaAnalyzer {
    fn analyze(&self, text: &str) -> Result<MorphemeStream> {
        let mut morphemes = Vec::new();

        let tokens = self
            .inner
            .tokenize(text)
            .map_err(|e| MalcheError::analysis(format!("Failed to segment text: {}", e)))?;

        for mut token in tokens {
            // Copy the plain fields before details() takes the mutable borrow.
            let surface = token.surface.as_ref().to_string();
            let position = token.position;
            let (byte_start, byte_end) = (token.byte_start, token.byte_end);

            let tag = match token.details().first() {
                Some(pos) => MorphTag::from_pos(pos),
                None => MorphTag::Unknown,
            };

            morphemes.push(Morpheme::with_offsets(
                surface, tag, position, byte_start, byte_end,
            ));
        }

        Ok(Box::new(morphemes.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_korean() {
        let analyzer = LinderaAnalyzer::new().unwrap();

        let morphs: Vec<Morpheme> = analyzer.analyze("아름다운 개는 짖는다").unwrap().collect();
        let surfaces: Vec<&str> = morphs.iter().map(|m| m.surface.as_str()).collect();

        assert!(surfaces.contains(&"아름다운") || surfaces.contains(&"아름답"));
        assert!(surfaces.contains(&"개"));
        // Particles and endings come through tagged, not dropped.
        assert!(morphs.iter().all(|m| m.tag().is_some()));
    }

    #[test]
    fn test_analyze_assigns_positions_and_offsets() {
        let analyzer = LinderaAnalyzer::new().unwrap();
        let text = "사람은 밥을 먹는다";

        let morphs: Vec<Morpheme> = analyzer.analyze(text).unwrap().collect();

        for (idx, m) in morphs.iter().enumerate() {
            assert_eq!(m.position, idx);
            assert_eq!(&text[m.start_offset..m.end_offset], m.surface);
        }
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = LinderaAnalyzer::new().unwrap();
        assert_eq!(analyzer.name(), "lindera");
    }
}
