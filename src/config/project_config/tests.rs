use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = SeoGateConfig::default();

    assert_eq!(config.workflow.submission_threshold, 66);
    assert_eq!(config.store.dir, PathBuf::from(".seo-gate"));
    assert_eq!(config.store.first_id, 100);
    assert!(config.gate().allows(66));
    assert!(!config.gate().allows(65));
}

#[test]
fn test_template_parses_to_defaults() {
    let config: SeoGateConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
    assert_eq!(config.workflow.submission_threshold, 66);
    assert_eq!(config.store.first_id, 100);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config: SeoGateConfig = toml::from_str(
        r#"
[workflow]
submission_threshold = 80
"#,
    )
    .unwrap();

    assert_eq!(config.workflow.submission_threshold, 80);
    assert_eq!(config.store.first_id, 100);
}

#[test]
fn test_load_prefers_toml() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(TOML_CONFIG_FILE),
        "[workflow]\nsubmission_threshold = 70\n",
    )
    .unwrap();
    std::fs::write(
        tmp.path().join(JSON_CONFIG_FILE),
        r#"{"workflow": {"submission_threshold": 50}}"#,
    )
    .unwrap();

    let config = load_config(tmp.path());

    assert_eq!(config.workflow.submission_threshold, 70);
}

#[test]
fn test_load_json_fallback() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(JSON_CONFIG_FILE),
        r#"{"store": {"dir": "data", "first_id": 1}}"#,
    )
    .unwrap();

    let config = load_config(tmp.path());

    assert_eq!(config.store.first_id, 1);
    assert_eq!(config.store_dir(tmp.path()), tmp.path().join("data"));
}

#[test]
fn test_malformed_toml_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(TOML_CONFIG_FILE), "[workflow\nnope").unwrap();

    let config = load_config(tmp.path());

    assert_eq!(config.workflow.submission_threshold, 66);
}

#[test]
fn test_gate_clamps_threshold() {
    let config: SeoGateConfig =
        toml::from_str("[workflow]\nsubmission_threshold = 200\n").unwrap();
    assert_eq!(config.gate().threshold(), 100);
}

#[test]
fn test_absolute_store_dir_is_kept() {
    let tmp = TempDir::new().unwrap();
    let mut config = SeoGateConfig::default();
    config.store.dir = tmp.path().join("abs");
    assert_eq!(config.store_dir(Path::new("/elsewhere")), tmp.path().join("abs"));
}
