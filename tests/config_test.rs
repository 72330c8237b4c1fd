// tests/config_test.rs
use merge_message::classifier::MergeMessageClassifier;
use merge_message::config::{load_config, Config, LOCAL_CONFIG_FILE};
use merge_message::domain::{SemanticVersion, SemanticVersionFormat};
use merge_message::MergeMessageError;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert!(config.merge_message_formats.is_empty());
    assert_eq!(config.label_prefix, Some("v".to_string()));
    assert_eq!(config.semantic_version_format, SemanticVersionFormat::Strict);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
label_prefix = "ver"

[[merge_message_formats]]
name = "Custom"
pattern = '^Landed (?<SourceBranch>\S+)'
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.label_prefix, Some("ver".to_string()));
    assert_eq!(config.merge_message_formats.len(), 1);
    assert_eq!(config.merge_message_formats[0].name, "Custom");
    assert_eq!(config.semantic_version_format, SemanticVersionFormat::Strict);
}

#[test]
fn test_fixture_formats_are_applied_in_order() {
    let config = load_config(Some(&fixture("config_with_formats.toml")))
        .expect("Failed to load test config");
    let names: Vec<&str> = config
        .merge_message_formats
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Gerrit", "Azure"]);

    let classifier = MergeMessageClassifier::new(&config).unwrap();
    let merge = classifier.classify("Merged PR 314: release-2.1");
    assert_eq!(merge.format_name(), Some("Azure"));
    assert_eq!(merge.pull_request_number(), Some(314));
    assert_eq!(merge.version(), Some(&SemanticVersion::new(2, 1, 0)));

    let merge = classifier.classify("Merge \"feature/x\" into main");
    assert_eq!(merge.format_name(), Some("Gerrit"));
    assert_eq!(merge.target_branch(), Some("main"));
}

#[test]
fn test_invalid_pattern_is_reported_when_building() {
    let config = load_config(Some(&fixture("config_with_invalid_pattern.toml")))
        .expect("patterns are compiled by the classifier, not the loader");
    match MergeMessageClassifier::new(&config) {
        Err(MergeMessageError::Pattern { name, .. }) => assert_eq!(name, "Broken"),
        other => panic!("expected pattern error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_duplicate_formats_are_rejected() {
    let err = load_config(Some(&fixture("config_with_duplicates.toml"))).unwrap_err();
    assert!(matches!(err, MergeMessageError::Config(_)));
    assert!(err.to_string().contains("Custom"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_config(Some(&fixture("does_not_exist.toml"))).unwrap_err();
    assert!(matches!(err, MergeMessageError::Io(_)));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"label_prefix = [").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, MergeMessageError::Toml(_)));
}

#[test]
#[serial]
fn test_discovers_config_in_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "semantic_version_format = \"loose\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.semantic_version_format, SemanticVersionFormat::Loose);
}
