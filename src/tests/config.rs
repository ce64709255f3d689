use crate::config::{Config, HighlightTerms};

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_missing_config_is_created() {
    let dir = temp_dir();
    let config = Config::load_with(dir.path()).unwrap();

    assert!(dir.path().join("config.yaml").exists());
    assert_eq!(config.highlight.style.open, "<mark>");
    assert_eq!(config.highlight.style.close, "</mark>");
    assert_eq!(config.highlight.terms, HighlightTerms::All);
    assert_eq!(config.heading_prefix, "# ");
    assert_eq!(config.parallel_threshold, 256);

    // second load reads the file written by the first
    assert_eq!(Config::load_with(dir.path()).unwrap(), config);
}

#[test]
fn test_partial_config_gets_defaults() {
    let dir = temp_dir();
    let config_content = r#"
highlight:
  open: "["
  close: "]"
  terms: matched
parallel_threshold: 0
"#;
    std::fs::write(dir.path().join("config.yaml"), config_content).unwrap();

    let config = Config::load_with(dir.path()).unwrap();
    assert_eq!(config.highlight.style.open, "[");
    assert_eq!(config.highlight.style.close, "]");
    assert_eq!(config.highlight.terms, HighlightTerms::Matched);
    assert_eq!(config.heading_prefix, "# ");
    assert_eq!(config.parallel_threshold, 1);

    // normalized values are written back
    let saved = std::fs::read_to_string(dir.path().join("config.yaml")).unwrap();
    let value: serde_yml::Value = serde_yml::from_str(&saved).unwrap();
    assert_eq!(value["parallel_threshold"].as_u64(), Some(1));
    assert_eq!(value["heading_prefix"].as_str(), Some("# "));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("config.yaml"), "highlight: [").unwrap();
    assert!(Config::load_with(dir.path()).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("config.yaml"), "heading_prefix: '  '\n").unwrap();
    assert!(Config::load_with(dir.path()).is_err());

    std::fs::write(
        dir.path().join("config.yaml"),
        "highlight:\n  open: ''\n  close: ''\n",
    )
    .unwrap();
    assert!(Config::load_with(dir.path()).is_err());
}
