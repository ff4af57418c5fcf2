//! ショートリスト納品出力の統合テスト

use photo_rank::cli::ExportFormat;
use photo_rank::export::{self, excel, json};
use photo_rank_common::catalog::{sample_catalog, sample_profile};
use photo_rank_common::{rank, ScoringWeights, ShortlistDelivery};
use tempfile::tempdir;

fn create_delivery(photos: &[photo_rank_common::Photo], count: usize) -> ShortlistDelivery {
    let weights = ScoringWeights::default();
    let profile = sample_profile();
    let ranked = rank(photos, &weights.normalize().unwrap(), &profile);
    ShortlistDelivery::new("テスト納品", "2024-06-20T10:00:00+09:00", weights, &profile, &ranked[..count])
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("shortlist.xlsx");
    let photos = sample_catalog();

    let result = excel::write_excel(&create_delivery(&photos, 4), &output_path);

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_json_generation_keeps_ranking_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("shortlist.json");
    let photos = sample_catalog();
    let delivery = create_delivery(&photos, 3);

    json::write_json(&delivery, &output_path).expect("JSON出力失敗");

    let content = std::fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let exported = value["photos"].as_array().unwrap();
    assert_eq!(exported.len(), 3);
    assert_eq!(exported[0]["rank"], 1);
    assert_eq!(exported[0]["id"], delivery.photos[0].id.as_str());
    assert_eq!(value["summary"]["count"], 3);
    assert_eq!(value["title"], "テスト納品");
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_dir = dir.path().join("delivery");
    let photos = sample_catalog();

    let written = export::export_delivery(&create_delivery(&photos, 2), &ExportFormat::Both, &out_dir)
        .expect("出力失敗");

    assert_eq!(written.len(), 2);
    assert!(out_dir.join("テスト納品.xlsx").exists());
    assert!(out_dir.join("テスト納品.json").exists());
}

#[test]
fn test_export_json_to_explicit_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_file = dir.path().join("final.json");
    let photos = sample_catalog();

    let written = export::export_delivery(&create_delivery(&photos, 1), &ExportFormat::Json, &out_file)
        .expect("出力失敗");

    assert_eq!(written, vec![out_file.clone()]);
    assert!(out_file.exists());
}

/// タイトルにパス区切りを含んでも出力ディレクトリ内に書く
#[test]
fn test_export_title_with_slash() {
    let dir = tempdir().expect("Failed to create temp dir");
    let photos = sample_catalog();
    let mut delivery = create_delivery(&photos, 2);
    delivery.title = "Smith/Jones wedding".to_string();

    let written = export::export_delivery(&delivery, &ExportFormat::Json, dir.path())
        .expect("出力失敗");

    let expected = dir.path().join("Smith_Jones wedding.json");
    assert_eq!(written, vec![expected.clone()]);
    assert!(expected.exists());
}

/// 空のタイトルは既定のファイル名になる
#[test]
fn test_export_blank_title() {
    let dir = tempdir().expect("Failed to create temp dir");
    let photos = sample_catalog();
    let mut delivery = create_delivery(&photos, 1);
    delivery.title = "  ".to_string();

    export::export_delivery(&delivery, &ExportFormat::Both, dir.path()).expect("出力失敗");

    assert!(dir.path().join("shortlist.xlsx").exists());
    assert!(dir.path().join("shortlist.json").exists());
    assert!(!dir.path().join(".json").exists());
}
