//! 写真カタログ
//!
//! 組み込みのサンプルカタログ（ダッシュボードとCLIの既定値）と、
//! JSONからの読み込み・検証。

use crate::error::{Error, Result};
use crate::profile::ClientProfile;
use crate::types::{Mood, Photo, PhotoMetrics, ShotType};
use std::collections::HashSet;

/// JSON文字列から読み込み（検証込み）
pub fn from_json(json: &str) -> Result<Vec<Photo>> {
    let photos: Vec<Photo> = serde_json::from_str(json)?;
    validate(&photos)?;
    Ok(photos)
}

/// JSONファイルから読み込み（wasm32以外）
#[cfg(not(target_arch = "wasm32"))]
pub fn from_file(path: &std::path::Path) -> Result<Vec<Photo>> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// ID重複・空ID・範囲外の評価値を検出
pub fn validate(photos: &[Photo]) -> Result<()> {
    let mut seen = HashSet::new();

    for photo in photos {
        if photo.id.trim().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "IDが空の写真があります: {}",
                photo.title
            )));
        }
        if !seen.insert(photo.id.as_str()) {
            return Err(Error::InvalidCatalog(format!("IDが重複しています: {}", photo.id)));
        }

        let metrics = [
            ("sharpness", photo.metrics.sharpness),
            ("emotion", photo.metrics.emotion),
            ("clientRelevance", photo.metrics.client_relevance),
        ];
        for (name, value) in metrics {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidCatalog(format!(
                    "{} の {} が範囲外です: {}",
                    photo.id, name, value
                )));
            }
        }
    }

    Ok(())
}

struct Seed {
    id: &'static str,
    title: &'static str,
    shot_type: ShotType,
    mood: Mood,
    location: &'static str,
    tags: &'static [&'static str],
    notes: &'static [&'static str],
    faces: u32,
    captured_at: &'static str,
    metrics: (f64, f64, f64),
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "ph-001",
        title: "Morning light on the dress",
        shot_type: ShotType::Detail,
        mood: Mood::Serene,
        location: "Bridal Suite",
        tags: &["getting ready", "dress"],
        notes: &["Mother asked for the lace close-up"],
        faces: 0,
        captured_at: "2024-06-15T09:12:00",
        metrics: (0.93, 0.48, 0.62),
    },
    Seed {
        id: "ph-002",
        title: "Bridesmaids laughing",
        shot_type: ShotType::Candid,
        mood: Mood::Joyful,
        location: "Bridal Suite",
        tags: &["getting ready", "bridesmaids"],
        notes: &[],
        faces: 5,
        captured_at: "2024-06-15T10:03:00",
        metrics: (0.71, 0.92, 0.74),
    },
    Seed {
        id: "ph-003",
        title: "First look under the oak",
        shot_type: ShotType::Portrait,
        mood: Mood::Romantic,
        location: "Garden",
        tags: &["first look", "couple"],
        notes: &["Must include in the album"],
        faces: 2,
        captured_at: "2024-06-15T12:40:00",
        metrics: (0.88, 0.95, 0.91),
    },
    Seed {
        id: "ph-004",
        title: "Rings on the hymn book",
        shot_type: ShotType::Detail,
        mood: Mood::Serene,
        location: "Chapel",
        tags: &["rings", "ceremony"],
        notes: &[],
        faces: 0,
        captured_at: "2024-06-15T13:20:00",
        metrics: (0.97, 0.41, 0.58),
    },
    Seed {
        id: "ph-005",
        title: "Walking down the aisle",
        shot_type: ShotType::Candid,
        mood: Mood::Dramatic,
        location: "Chapel",
        tags: &["ceremony", "aisle"],
        notes: &["Father of the bride in frame"],
        faces: 3,
        captured_at: "2024-06-15T14:02:00",
        metrics: (0.64, 0.89, 0.83),
    },
    Seed {
        id: "ph-006",
        title: "Exchanging rings",
        shot_type: ShotType::Portrait,
        mood: Mood::Romantic,
        location: "Chapel",
        tags: &["ceremony", "rings", "couple"],
        notes: &[],
        faces: 2,
        captured_at: "2024-06-15T14:18:00",
        metrics: (0.76, 0.87, 0.88),
    },
    Seed {
        id: "ph-007",
        title: "Family on the chapel steps",
        shot_type: ShotType::Group,
        mood: Mood::Joyful,
        location: "Chapel",
        tags: &["family", "formal"],
        notes: &["Grandparents must be visible"],
        faces: 14,
        captured_at: "2024-06-15T14:55:00",
        metrics: (0.82, 0.66, 0.79),
    },
    Seed {
        id: "ph-008",
        title: "Vineyard at golden hour",
        shot_type: ShotType::Landscape,
        mood: Mood::Serene,
        location: "Vineyard",
        tags: &["golden hour", "venue"],
        notes: &[],
        faces: 0,
        captured_at: "2024-06-15T19:45:00",
        metrics: (0.9, 0.57, 0.35),
    },
    Seed {
        id: "ph-009",
        title: "Silhouette against the sunset",
        shot_type: ShotType::Portrait,
        mood: Mood::Dramatic,
        location: "Vineyard",
        tags: &["golden hour", "couple"],
        notes: &["Client loves silhouettes"],
        faces: 2,
        captured_at: "2024-06-15T20:05:00",
        metrics: (0.69, 0.9, 0.86),
    },
    Seed {
        id: "ph-010",
        title: "Cake cutting",
        shot_type: ShotType::Candid,
        mood: Mood::Joyful,
        location: "Reception Hall",
        tags: &["cake", "reception"],
        notes: &[],
        faces: 2,
        captured_at: "2024-06-15T21:10:00",
        metrics: (0.58, 0.78, 0.67),
    },
    Seed {
        id: "ph-011",
        title: "Packed dance floor",
        shot_type: ShotType::Group,
        mood: Mood::Energetic,
        location: "Reception Hall",
        tags: &["dance", "reception", "party"],
        notes: &["Keep the motion blur"],
        faces: 23,
        captured_at: "2024-06-15T22:30:00",
        metrics: (0.44, 0.94, 0.72),
    },
    Seed {
        id: "ph-012",
        title: "Sparkler send-off",
        shot_type: ShotType::Group,
        mood: Mood::Energetic,
        location: "Garden",
        tags: &["send-off", "night"],
        notes: &[],
        faces: 18,
        captured_at: "2024-06-15T23:40:00",
        metrics: (0.52, 0.86, 0.77),
    },
];

/// 組み込みのサンプルカタログ（結婚式1日分、12枚）
pub fn sample_catalog() -> Vec<Photo> {
    SEEDS
        .iter()
        .map(|seed| Photo {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            image_url: format!("/photos/{}.jpg", seed.id),
            thumbnail_url: format!("/photos/thumbs/{}.jpg", seed.id),
            shot_type: seed.shot_type,
            mood: seed.mood,
            location: seed.location.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            client_notes: seed.notes.iter().map(|n| n.to_string()).collect(),
            faces: seed.faces,
            captured_at: seed.captured_at.to_string(),
            metrics: PhotoMetrics {
                sharpness: seed.metrics.0,
                emotion: seed.metrics.1,
                client_relevance: seed.metrics.2,
            },
        })
        .collect()
}

/// サンプルのクライアントプロファイル
pub fn sample_profile() -> ClientProfile {
    ClientProfile::default()
        .with_moods([Mood::Romantic, Mood::Joyful])
        .with_shots([ShotType::Portrait, ShotType::Candid])
        .with_tags(["first look", "ceremony"])
        .with_minimum_faces(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let photos = sample_catalog();
        assert_eq!(photos.len(), 12);
        assert!(validate(&photos).is_ok());
    }

    #[test]
    fn test_from_json_roundtrip_sample() {
        let json = serde_json::to_string(&sample_catalog()).unwrap();
        let photos = from_json(&json).unwrap();
        let sample = sample_catalog();
        assert_eq!(photos.len(), sample.len());
        for (loaded, original) in photos.iter().zip(&sample) {
            assert_eq!(loaded.id, original.id);
            assert_eq!(loaded.tags, original.tags);
            assert!((loaded.metrics.emotion - original.metrics.emotion).abs() < 1e-12);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut photos = sample_catalog();
        photos[1].id = photos[0].id.clone();
        let err = validate(&photos).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
        assert!(err.to_string().contains("ph-001"));
    }

    #[test]
    fn test_out_of_range_metric_rejected() {
        let mut photos = sample_catalog();
        photos[4].metrics.emotion = 1.2;
        assert!(validate(&photos).is_err());

        let mut photos = sample_catalog();
        photos[4].metrics.sharpness = f64::NAN;
        assert!(validate(&photos).is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut photos = sample_catalog();
        photos[0].id = "  ".to_string();
        assert!(validate(&photos).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_sample_profile() {
        let profile = sample_profile();
        assert!(!profile.is_empty());
        assert_eq!(profile.minimum_faces, 2);
    }
}
