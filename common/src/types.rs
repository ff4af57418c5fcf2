//! 写真カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Photo: カタログ内の写真1枚（不変）
//! - PhotoMetrics: 事前計算済みの評価値（0.0〜1.0）
//! - ShotType / Mood: カテゴリ属性

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// ショット種別（構図の分類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShotType {
    Portrait,
    Candid,
    Detail,
    Group,
    Landscape,
}

impl ShotType {
    pub const ALL: [ShotType; 5] = [
        ShotType::Portrait,
        ShotType::Candid,
        ShotType::Detail,
        ShotType::Group,
        ShotType::Landscape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::Portrait => "Portrait",
            ShotType::Candid => "Candid",
            ShotType::Detail => "Detail",
            ShotType::Group => "Group",
            ShotType::Landscape => "Landscape",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShotType::ALL
            .into_iter()
            .find(|shot| shot.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown shot type: {}. Use portrait, candid, detail, group, or landscape",
                    s
                )
            })
    }
}

/// ムード（写真の感情トーン）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Joyful,
    Romantic,
    Dramatic,
    Serene,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Joyful,
        Mood::Romantic,
        Mood::Dramatic,
        Mood::Serene,
        Mood::Energetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Joyful => "Joyful",
            Mood::Romantic => "Romantic",
            Mood::Dramatic => "Dramatic",
            Mood::Serene => "Serene",
            Mood::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown mood: {}. Use joyful, romantic, dramatic, serene, or energetic",
                    s
                )
            })
    }
}

/// 事前計算済みの評価値（各0.0〜1.0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetrics {
    /// 技術品質（シャープネス）
    pub sharpness: f64,
    /// ストーリー性（感情の温かさ）
    pub emotion: f64,
    /// クライアント適合度（事前計算）
    pub client_relevance: f64,
}

/// カタログの写真1枚
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub thumbnail_url: String,

    pub shot_type: ShotType,
    pub mood: Mood,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub client_notes: BTreeSet<String>,

    #[serde(default)]
    pub faces: u32,

    /// 撮影日時（ISO-8601）
    #[serde(default)]
    pub captured_at: String,

    pub metrics: PhotoMetrics,
}

impl Photo {
    /// タグを含むか（前後空白・大文字小文字を無視）
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.trim();
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_photo() -> Photo {
        Photo {
            id: "p-001".to_string(),
            title: "First look".to_string(),
            image_url: String::new(),
            thumbnail_url: String::new(),
            shot_type: ShotType::Portrait,
            mood: Mood::Romantic,
            location: "Garden".to_string(),
            tags: ["first look".to_string(), "Couple".to_string()].into(),
            client_notes: BTreeSet::new(),
            faces: 2,
            captured_at: "2024-06-01T14:05:00".to_string(),
            metrics: PhotoMetrics {
                sharpness: 0.9,
                emotion: 0.8,
                client_relevance: 0.7,
            },
        }
    }

    #[test]
    fn test_shot_type_from_str_ignores_case() {
        assert_eq!("portrait".parse::<ShotType>(), Ok(ShotType::Portrait));
        assert_eq!(" GROUP ".parse::<ShotType>(), Ok(ShotType::Group));
        assert!("selfie".parse::<ShotType>().is_err());
    }

    #[test]
    fn test_mood_from_str_ignores_case() {
        assert_eq!("joyful".parse::<Mood>(), Ok(Mood::Joyful));
        assert_eq!("Serene".parse::<Mood>(), Ok(Mood::Serene));
        assert!("gloomy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_photo_serialize_camel_case() {
        let json = serde_json::to_string(&sample_photo()).expect("シリアライズ失敗");
        assert!(json.contains("\"shotType\":\"Portrait\""));
        assert!(json.contains("\"clientRelevance\":0.7"));
        assert!(json.contains("\"capturedAt\":\"2024-06-01T14:05:00\""));
    }

    #[test]
    fn test_photo_deserialize_missing_optional_fields() {
        let json = r#"{
            "id": "p-9",
            "title": "Rings",
            "shotType": "Detail",
            "mood": "Serene",
            "metrics": {"sharpness": 0.5, "emotion": 0.4, "clientRelevance": 0.3}
        }"#;

        let photo: Photo = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(photo.id, "p-9");
        assert_eq!(photo.shot_type, ShotType::Detail);
        assert!(photo.tags.is_empty());
        assert_eq!(photo.faces, 0);
    }

    #[test]
    fn test_photo_deserialize_unknown_mood_fails() {
        let json = r#"{
            "id": "p-9",
            "title": "Rings",
            "shotType": "Detail",
            "mood": "Gloomy",
            "metrics": {"sharpness": 0.5, "emotion": 0.4, "clientRelevance": 0.3}
        }"#;

        assert!(serde_json::from_str::<Photo>(json).is_err());
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let photo = sample_photo();
        assert!(photo.has_tag("First Look"));
        assert!(photo.has_tag(" couple "));
        assert!(!photo.has_tag("cake"));
    }
}
