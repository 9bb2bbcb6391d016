//! Integration tests for the refinement stages and rule configuration.

use malche::prelude::*;
use tempfile::TempDir;

#[test]
fn test_stages_compose_by_hand() {
    // The pipeline wires these together; here the stages run bare to pin
    // down the contract between them.
    let combiner = MorphCombiner::with_table(
        CombineTable::empty().with_rule(["아름", "답다"], "아름답다"),
    );
    let validator = TokenValidator::new();
    let rewriter = TokenRewriter::new();

    let analyzed = vec![
        Morpheme::new("아름", MorphTag::Root, 0),
        Morpheme::new("답다", MorphTag::Unknown, 1),
        Morpheme::new("것", MorphTag::DependentNoun, 2),
        Morpheme::new("시작하다", MorphTag::CommonNoun, 3),
    ];

    let combined = combiner.combine(analyzed);
    assert_eq!(combined.len(), 3);
    assert!(combined[0].is_synthesized());

    let tokens: Vec<String> = combined
        .iter()
        .filter(|m| validator.is_valid(m, false))
        .map(|m| rewriter.rewrite(&m.surface))
        .collect();

    // 것 fell to the stoplist; the synthesized compound survived untouched
    // and 시작하다 lost its suffix.
    assert_eq!(tokens, vec!["아름답다", "시작"]);
}

#[test]
fn test_combine_output_feeds_validation() {
    // A synthesized surface passes validation even when the same surface
    // would fail as an analyzed morpheme.
    let combiner = MorphCombiner::with_table(CombineTable::empty().with_fused(["것", "들"]));
    let validator = TokenValidator::new();

    let combined = combiner.combine(vec![
        Morpheme::new("것", MorphTag::DependentNoun, 0),
        Morpheme::new("들", MorphTag::NounSuffix, 1),
    ]);

    assert_eq!(combined.len(), 1);
    assert!(validator.is_valid(&combined[0], true));
}

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");

    let config = RefineConfig::default();
    config.to_json_file(&path)?;
    let loaded = RefineConfig::from_json_file(&path)?;

    assert_eq!(loaded.combine, config.combine);
    assert_eq!(loaded.validity.max_word_chars, config.validity.max_word_chars);
    assert_eq!(loaded.validity.stop_words, config.validity.stop_words);
    assert_eq!(loaded.validity.noun_tags, config.validity.noun_tags);
    assert_eq!(loaded.rewrite.strip_suffixes, config.rewrite.strip_suffixes);
    assert_eq!(loaded.rewrite.aliases, config.rewrite.aliases);

    Ok(())
}

#[test]
fn test_rule_file_drives_the_pipeline() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");

    // A domain rule file: one combine rule, a tightened stoplist, an alias.
    let json = r#"{
        "combine": [{"parts": ["튜링", "머신"], "into": "튜링머신"}],
        "validity": {"stop_words": ["소식"]},
        "rewrite": {"aliases": {"계산기": "컴퓨터"}}
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = RefineConfig::from_json_file(&path)?;
    let tokenizer = Tokenizer::default().with_config(config);

    let tokens = tokenizer.get_tokens("튜링 머신 계산기 소식");
    assert_eq!(tokens, vec!["튜링머신", "컴퓨터"]);

    Ok(())
}

#[test]
fn test_malformed_rule_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = RefineConfig::from_json_file(&path).unwrap_err();
    match err {
        MalcheError::Config(msg) => assert!(msg.contains("broken.json")),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn test_determinism_across_runs() {
    let tokenizer = Tokenizer::default();
    let text = "머신 러닝 모델 학습하다 ㅋㅋㅋ 그것";

    let first = tokenizer.get_tokens(text);
    let second = tokenizer.get_tokens(text);
    let third = tokenizer.get_tokens(text);

    assert_eq!(first, second);
    assert_eq!(second, third);
}
