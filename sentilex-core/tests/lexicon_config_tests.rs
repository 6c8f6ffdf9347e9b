// sentilex-core/tests/lexicon_config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use sentilex_core::{load_lexicon, LexiconConfig, LexiconEngine, Polarity, Sentiment, SentimentEngine};

fn write_yaml(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_yaml(
        r#"
positive_words: [Superb, brilliant]
negative_words:
  - dreadful
"#,
    )?;
    let config = LexiconConfig::load_from_file(file.path())?;
    assert_eq!(config.positive_words, vec!["Superb", "brilliant"]);
    assert_eq!(config.negative_words, vec!["dreadful"]);
    assert!(!config.extend_builtin);

    let lexicon = config.into_lexicon()?;
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.polarity_of("superb"), Some(Polarity::Positive));
    assert_eq!(lexicon.polarity_of("good"), None);
    Ok(())
}

#[test]
fn test_load_lexicon_extend_builtin() -> Result<()> {
    let file = write_yaml("positive_words: [superb]\nextend_builtin: true\n")?;
    let lexicon = load_lexicon(Some(file.path()))?;
    assert_eq!(lexicon.len(), 17);

    let engine = LexiconEngine::with_lexicon(lexicon);
    let result = engine.classify("superb but boring");
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 0.5);
    Ok(())
}

#[test]
fn test_load_lexicon_without_path_is_builtin() -> Result<()> {
    let lexicon = load_lexicon(None)?;
    assert_eq!(&lexicon, sentilex_core::Lexicon::builtin());
    Ok(())
}

#[test]
fn test_load_lexicon_rejects_overlap() -> Result<()> {
    let file = write_yaml("positive_words: [fine]\nnegative_words: [FINE]\n")?;
    let err = load_lexicon(Some(file.path())).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid lexicon in"), "message: {}", message);
    assert!(message.contains("'fine' appears in both"), "message: {}", message);
    Ok(())
}

#[test]
fn test_load_from_missing_file_fails_with_context() {
    let err = LexiconConfig::load_from_file("/definitely/not/here/lexicon.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read lexicon file"));
}

#[test]
fn test_load_from_malformed_yaml_fails_with_context() -> Result<()> {
    let file = write_yaml("positive_words: good: bad\n")?;
    let err = LexiconConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse lexicon file"));
    Ok(())
}
