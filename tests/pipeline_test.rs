//! End-to-end pipeline tests against a scripted analyzer.
//!
//! The scripted analyzer replays canned segmentations, so these tests pin
//! the pipeline's behavior around a dictionary-style backend without
//! depending on one.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use anyhow::anyhow;
use malche::prelude::*;

/// Replays a canned segmentation per input text; errors on anything else.
struct ScriptedAnalyzer {
    script: HashMap<String, Vec<(String, MorphTag)>>,
}

impl ScriptedAnalyzer {
    fn new<const N: usize>(entries: [(&str, &[(&str, &str)]); N]) -> Self {
        let script = entries
            .into_iter()
            .map(|(text, morphs)| {
                let segmented = morphs
                    .iter()
                    .map(|&(surface, pos)| (surface.to_string(), MorphTag::from_pos(pos)))
                    .collect();
                (text.to_string(), segmented)
            })
            .collect();
        ScriptedAnalyzer { script }
    }
}

impl MorphAnalyzer for ScriptedAnalyzer {
    fn analyze(&self, text: &str) -> Result<MorphemeStream> {
        let segmented = self
            .script
            .get(text)
            .ok_or_else(|| anyhow!("no scripted analysis for '{}'", text))?;

        let morphs: Vec<Morpheme> = segmented
            .iter()
            .enumerate()
            .map(|(position, (surface, tag))| Morpheme::new(surface.clone(), *tag, position))
            .collect();

        Ok(Box::new(morphs.into_iter()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[test]
fn test_noun_extraction_keeps_nouns_only() {
    // The segmentation mecab-ko-dic produces for this sentence, replayed.
    let analyzer = ScriptedAnalyzer::new([(
        "아름다운 개는 짖는다",
        &[
            ("아름다운", "VA+ETM"),
            ("개", "NNG"),
            ("는", "JX"),
            ("짖", "VV"),
            ("는다", "EC"),
        ][..],
    )]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let nouns = tokenizer.get_nouns("아름다운 개는 짖는다.");

    assert_eq!(nouns, vec!["개"], "only the noun survives noun-only mode");
}

#[test]
fn test_get_tokens_keeps_predicates() {
    let analyzer = ScriptedAnalyzer::new([(
        "아름다운 개는 짖는다",
        &[
            ("아름다운", "VA+ETM"),
            ("개", "NNG"),
            ("는", "JX"),
            ("짖", "VV"),
            ("는다", "EC"),
        ][..],
    )]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let tokens = tokenizer.get_tokens("아름다운 개는 짖는다.");

    // All-tags mode keeps everything the validator accepts, particles
    // included; only noun-only mode filters on tag.
    assert_eq!(tokens, vec!["아름다운", "개", "는", "짖", "는다"]);
}

#[test]
fn test_mis_split_compound_is_repaired() {
    let analyzer = ScriptedAnalyzer::new([(
        "머신 러닝 강의",
        &[
            ("머신", "NNG"),
            ("러닝", "NNG"),
            ("강의", "NNG"),
        ][..],
    )]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let nouns = tokenizer.get_nouns("머신 러닝 강의!!");

    assert_eq!(nouns, vec!["머신러닝", "강의"]);
}

#[test]
fn test_foreign_and_number_handling() {
    let analyzer = ScriptedAnalyzer::new([(
        "rust 버전 2024 릴리스",
        &[
            ("rust", "SL"),
            ("버전", "NNG"),
            ("2024", "SN"),
            ("릴리스", "NNG"),
        ][..],
    )]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let nouns = tokenizer.get_nouns("Rust 버전 2024 릴리스");

    // rust is long enough to keep; the bare number fails the script rule.
    assert_eq!(nouns, vec!["rust", "버전", "릴리스"]);
}

#[test]
fn test_unscripted_input_degrades_to_fallback() {
    let analyzer = ScriptedAnalyzer::new([]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let first = tokenizer.get_tokens("한 번도 본 적 없는 문장");
    let second = tokenizer.get_tokens("한 번도 본 적 없는 문장");

    assert_eq!(first, vec!["한 번도 본 적 없는 문장"]);
    assert_eq!(first, second, "degraded output must be deterministic");
}

#[test]
fn test_empty_input_is_empty_everywhere() {
    let tokenizer = Tokenizer::new(Arc::new(ScriptedAnalyzer::new([])));

    assert!(tokenizer.get_tokens("").is_empty());
    assert!(tokenizer.get_nouns("   \t\n ").is_empty());
    assert!(tokenizer.get_tokens("\u{1F600}\u{1F680}").is_empty());
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
    let analyzer = ScriptedAnalyzer::new([(
        "개는 짖는다",
        &[("개", "NNG"), ("는", "JX"), ("짖는다", "VV+EC")][..],
    )]);
    let tokenizer = Arc::new(Tokenizer::new(Arc::new(analyzer)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = Arc::clone(&tokenizer);
            thread::spawn(move || tokenizer.get_nouns("개는 짖는다!"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["개"]);
    }
}

#[test]
fn test_long_document_chunking() {
    // Chunking stays in the caller's hands; each span runs independently.
    let analyzer = ScriptedAnalyzer::new([
        ("개는 짖는다", &[("개", "NNG"), ("는", "JX"), ("짖는다", "VV+EC")][..]),
        ("사람은 걷는다", &[("사람", "NNG"), ("은", "JX"), ("걷는다", "VV+EC")][..]),
    ]);
    let tokenizer = Tokenizer::new(Arc::new(analyzer));

    let document = "개는 짖는다 사람은 걷는다";
    let mut nouns = Vec::new();
    for span in chunks(document, 7) {
        nouns.extend(tokenizer.get_nouns(&span));
    }

    assert_eq!(nouns, vec!["개", "사람"]);
}
