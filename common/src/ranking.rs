//! ランキングエンジン
//!
//! カタログ・正規化済み重み・クライアントプロファイルから
//! 写真ごとのスコアを計算し、降順に並べる。
//!
//! プロファイル不一致は除外ではなく減点として扱う（ソフトランキング）。
//! 絞り込みは `dashboard` 側のフィルタで明示的に行う。

use crate::profile::ClientProfile;
use crate::types::Photo;
use crate::weights::NormalizedWeights;
use serde::Serialize;

/// 好みのムードに一致したときの加点
pub const MOOD_BONUS: f64 = 0.15;
/// ハイライトタグ全一致時の加点（一致率に比例）
pub const TAG_BONUS: f64 = 0.20;
/// 必須ショット種別に含まれないときの減衰率
pub const SHOT_MISMATCH_FACTOR: f64 = 0.6;
/// 人数が最低人数に満たないときの減衰率
pub const FACE_SHORTFALL_FACTOR: f64 = 0.7;

/// スコアの内訳
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 重み付き技術品質
    pub technical: f64,
    /// 重み付きストーリー性
    pub storytelling: f64,
    /// 重み付きクライアント適合
    pub client_alignment: f64,
    /// 重み付け前のクライアント適合サブスコア（0.0〜1.0）
    pub alignment_subscore: f64,
    pub mood_matched: bool,
    pub matched_tags: usize,
    pub shot_penalized: bool,
    pub face_penalized: bool,
}

/// ランキング結果の1件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<'a> {
    pub photo: &'a Photo,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// カタログをスコア降順に並べる
///
/// 同点はカタログ順を保持する（安定ソート）。
pub fn rank<'a>(
    photos: &'a [Photo],
    weights: &NormalizedWeights,
    profile: &ClientProfile,
) -> Vec<RankedEntry<'a>> {
    let mut ranked: Vec<RankedEntry<'a>> = photos
        .iter()
        .map(|photo| score_photo(photo, weights, profile))
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        photos = ranked.len(),
        top = ranked.first().map(|e| e.photo.id.as_str()).unwrap_or("-"),
        "ranking recomputed"
    );

    ranked
}

/// 写真1枚のスコアを計算
pub fn score_photo<'a>(
    photo: &'a Photo,
    weights: &NormalizedWeights,
    profile: &ClientProfile,
) -> RankedEntry<'a> {
    let mut breakdown = alignment_breakdown(photo, profile);

    breakdown.technical = weights.technical() * unit(photo.metrics.sharpness);
    breakdown.storytelling = weights.storytelling() * unit(photo.metrics.emotion);
    breakdown.client_alignment = weights.client_alignment() * breakdown.alignment_subscore;

    let score = unit(breakdown.technical + breakdown.storytelling + breakdown.client_alignment);

    RankedEntry {
        photo,
        score,
        breakdown,
    }
}

/// クライアント適合サブスコア（重み付け前）と、発火したシグナル
fn alignment_breakdown(photo: &Photo, profile: &ClientProfile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    let mut composite = unit(photo.metrics.client_relevance);

    if profile.preferred_moods.contains(&photo.mood) {
        breakdown.mood_matched = true;
        composite += MOOD_BONUS;
    }

    if !profile.highlight_tags.is_empty() {
        breakdown.matched_tags = profile
            .highlight_tags
            .iter()
            .filter(|tag| photo.has_tag(tag))
            .count();
        let ratio = breakdown.matched_tags as f64 / profile.highlight_tags.len() as f64;
        composite += TAG_BONUS * ratio;
    }

    if !profile.required_shots.is_empty() && !profile.required_shots.contains(&photo.shot_type) {
        breakdown.shot_penalized = true;
        composite *= SHOT_MISMATCH_FACTOR;
    }

    if photo.faces < profile.minimum_faces {
        breakdown.face_penalized = true;
        composite *= FACE_SHORTFALL_FACTOR;
    }

    breakdown.alignment_subscore = unit(composite);
    breakdown
}

/// [0, 1] に収める。非有限値は0扱い
fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
