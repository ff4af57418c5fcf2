//! 設定ファイルの統合テスト

use photo_rank::config::{Config, CATALOG_ENV};
use photo_rank::error::PhotoRankError;
use photo_rank_common::ScoringWeights;
use std::path::PathBuf;
use tempfile::tempdir;

/// 設定ファイルがなければデフォルト
#[test]
fn test_load_missing_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.top_n, 12);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_weights(ScoringWeights::new(20.0, 30.0, 50.0)).unwrap();
    config.set_top_n(5).unwrap();
    config.catalog = Some(PathBuf::from("/data/catalog.json"));
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 一部のキーだけの設定ファイル
#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"topN": 3}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.top_n, 3);
    assert_eq!(config.weights, ScoringWeights::default());
    assert!(config.profile.is_none());
}

/// 壊れた設定ファイル
#[test]
fn test_invalid_config_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, PhotoRankError::JsonParse(_)));
}

/// 不正な値は設定できない
#[test]
fn test_setters_reject_invalid_values() {
    let mut config = Config::default();
    assert!(config.set_weights(ScoringWeights::new(0.0, 0.0, 0.0)).is_err());
    assert!(config.set_top_n(0).is_err());
    assert_eq!(config, Config::default());
}

/// 環境変数は設定ファイルより優先
#[test]
fn test_catalog_env_overrides_config() {
    let config = Config {
        catalog: Some(PathBuf::from("from-config.json")),
        ..Default::default()
    };

    std::env::set_var(CATALOG_ENV, "from-env.json");
    let resolved = config.catalog_path();
    std::env::remove_var(CATALOG_ENV);

    assert_eq!(resolved, Some(PathBuf::from("from-env.json")));
    assert_eq!(config.catalog_path(), Some(PathBuf::from("from-config.json")));
}
