//! ショートリスト納品データ
//!
//! JSON出力とExcel出力の両方がこの形を元にする。

use crate::dashboard::ShortlistSummary;
use crate::profile::ClientProfile;
use crate::ranking::RankedEntry;
use crate::types::{Mood, ShotType};
use crate::weights::ScoringWeights;
use serde::Serialize;

/// 納品する写真1枚
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPhoto {
    /// ショートリスト内の順位（1始まり）
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub shot_type: ShotType,
    pub mood: Mood,
    pub location: String,
    pub faces: u32,
    pub tags: Vec<String>,
    pub score: f64,
    pub technical: f64,
    pub storytelling: f64,
    pub client_alignment: f64,
    pub alignment_subscore: f64,
}

impl DeliveryPhoto {
    fn from_entry(rank: usize, entry: &RankedEntry<'_>) -> Self {
        let photo = entry.photo;
        Self {
            rank,
            id: photo.id.clone(),
            title: photo.title.clone(),
            image_url: photo.image_url.clone(),
            shot_type: photo.shot_type,
            mood: photo.mood,
            location: photo.location.clone(),
            faces: photo.faces,
            tags: photo.tags.iter().cloned().collect(),
            score: entry.score,
            technical: entry.breakdown.technical,
            storytelling: entry.breakdown.storytelling,
            client_alignment: entry.breakdown.client_alignment,
            alignment_subscore: entry.breakdown.alignment_subscore,
        }
    }
}

/// 納品データ一式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistDelivery {
    pub title: String,
    /// 生成日時（呼び出し側で付与）
    pub generated_at: String,
    pub weights: ScoringWeights,
    pub profile: ClientProfile,
    pub summary: ShortlistSummary,
    pub photos: Vec<DeliveryPhoto>,
}

impl ShortlistDelivery {
    /// ランキング順のショートリストから組み立てる
    pub fn new(
        title: &str,
        generated_at: &str,
        weights: ScoringWeights,
        profile: &ClientProfile,
        shortlist: &[RankedEntry<'_>],
    ) -> Self {
        Self {
            title: title.to_string(),
            generated_at: generated_at.to_string(),
            weights,
            profile: profile.clone(),
            summary: ShortlistSummary::from_entries(shortlist),
            photos: shortlist
                .iter()
                .enumerate()
                .map(|(i, entry)| DeliveryPhoto::from_entry(i + 1, entry))
                .collect(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 納品タイトルからファイル名を作る
///
/// パス区切りや使えない文字は `_` に置き換え、空なら `shortlist`。
pub fn file_name_for(title: &str, extension: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        format!("shortlist.{}", extension)
    } else {
        format!("{}.{}", stem, extension)
    }
}
