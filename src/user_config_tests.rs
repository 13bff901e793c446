use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
    assert_eq!(cfg.storage.backend, StoreBackend::Markdown);
    assert_eq!(cfg.storage.data_dir(), default_data_dir());
}

#[test]
fn test_storage_section() {
    let toml_str = "[storage]\nbackend = \"memory\"\ndata_dir = \"/srv/syllabus\"\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse [storage]");
    assert_eq!(cfg.storage.backend, StoreBackend::Memory);
    assert_eq!(cfg.storage.data_dir(), PathBuf::from("/srv/syllabus"));
}

#[test]
fn test_unknown_storage_key_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[storage]\ncache = true\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_backend_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[storage]\nbackend = \"sqlite\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_absent_file_gives_defaults() {
    let dir = tempdir().expect("tempdir");
    let cfg = load_user_config_from(&dir.path().join("config.toml")).expect("defaults");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "# syllabus user config\n\n[storage]\nbackend = \"markdown\"\n")
        .expect("write config");

    let cfg = load_user_config_from(&path).expect("parse config");
    assert_eq!(cfg.storage.backend, StoreBackend::Markdown);
}

#[test]
fn test_load_malformed_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[storage\n").expect("write config");

    assert!(matches!(
        load_user_config_from(&path),
        Err(UserConfigError::Toml(_))
    ));
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig {
        storage: StorageConfig {
            backend: StoreBackend::Memory,
            data_dir: Some(PathBuf::from("/data")),
        },
    };
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}
