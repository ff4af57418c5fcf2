//! ダッシュボードの状態と表示データ（CLI/WASM共通）
//!
//! ランキング結果に対する明示的な絞り込み（フィルタチップ・検索）、
//! ショートリストの管理、ヒーロー・ページ・集計の導出を行う。

use crate::profile::toggle;
use crate::ranking::RankedEntry;
use crate::types::{Mood, Photo, ShotType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 1ページの表示件数
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// フィルタ状態
///
/// 同じ次元のチップはOR、次元同士はAND。空の次元は制約なし。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub shot_types: BTreeSet<ShotType>,
    pub moods: BTreeSet<Mood>,
    pub locations: BTreeSet<String>,
    pub search: String,
    pub show_selected_only: bool,
}

impl FilterState {
    pub fn toggle_shot(&mut self, shot: ShotType) -> bool {
        toggle(&mut self.shot_types, shot)
    }

    pub fn toggle_mood(&mut self, mood: Mood) -> bool {
        toggle(&mut self.moods, mood)
    }

    pub fn toggle_location(&mut self, location: &str) -> bool {
        toggle(&mut self.locations, location.to_string())
    }

    pub fn is_active(&self) -> bool {
        !self.shot_types.is_empty()
            || !self.moods.is_empty()
            || !self.locations.is_empty()
            || !self.search.trim().is_empty()
            || self.show_selected_only
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 写真がフィルタ条件を満たすか
    pub fn matches(&self, photo: &Photo, shortlist: &Shortlist) -> bool {
        if !self.shot_types.is_empty() && !self.shot_types.contains(&photo.shot_type) {
            return false;
        }
        if !self.moods.is_empty() && !self.moods.contains(&photo.mood) {
            return false;
        }
        if !self.locations.is_empty() && !self.locations.contains(&photo.location) {
            return false;
        }
        if self.show_selected_only && !shortlist.contains(&photo.id) {
            return false;
        }
        matches_search(photo, &self.search)
    }
}

/// タイトル・撮影場所・タグ・クライアントメモの部分一致（大文字小文字無視）
fn matches_search(photo: &Photo, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(&photo.title)
        || contains(&photo.location)
        || photo.tags.iter().any(|t| contains(t))
        || photo.client_notes.iter().any(|n| contains(n))
}

/// ショートリスト（納品候補の写真ID集合）
///
/// ランキングとは独立しており、再計算後も保持される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortlist {
    ids: BTreeSet<String>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択の切り替え。切り替え後に選択されていればtrue
    pub fn toggle(&mut self, id: &str) -> bool {
        toggle(&mut self.ids, id.to_string())
    }

    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Shortlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// ショートリストの集計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistSummary {
    pub count: usize,
    pub average_score: f64,
    /// クライアント適合サブスコアの平均
    pub average_alignment: f64,
    pub total_faces: u32,
    pub mood_counts: BTreeMap<Mood, usize>,
}

impl ShortlistSummary {
    pub fn from_entries(entries: &[RankedEntry<'_>]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let count = entries.len();
        let mut mood_counts = BTreeMap::new();
        for entry in entries {
            *mood_counts.entry(entry.photo.mood).or_insert(0) += 1;
        }

        Self {
            count,
            average_score: entries.iter().map(|e| e.score).sum::<f64>() / count as f64,
            average_alignment: entries
                .iter()
                .map(|e| e.breakdown.alignment_subscore)
                .sum::<f64>()
                / count as f64,
            total_faces: entries.iter().map(|e| e.photo.faces).sum(),
            mood_counts,
        }
    }
}

/// 画面に表示するデータ一式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub catalog_count: usize,
    pub filtered_count: usize,
    /// 絞り込み後の最上位（ヒーロー候補）
    pub hero: Option<RankedEntry<'a>>,
    pub page: Vec<RankedEntry<'a>>,
    /// ショートリスト（ランキング順、フィルタ非適用）
    pub shortlist: Vec<RankedEntry<'a>>,
    pub summary: ShortlistSummary,
}

/// ランキング結果から表示データを組み立てる
pub fn build_view<'a>(
    ranked: &[RankedEntry<'a>],
    filters: &FilterState,
    shortlist: &Shortlist,
    page_size: usize,
) -> DashboardView<'a> {
    let filtered: Vec<&RankedEntry<'a>> = ranked
        .iter()
        .filter(|entry| filters.matches(entry.photo, shortlist))
        .collect();

    let selected: Vec<RankedEntry<'a>> = ranked
        .iter()
        .filter(|entry| shortlist.contains(&entry.photo.id))
        .cloned()
        .collect();

    if selected.len() < shortlist.len() {
        tracing::warn!(
            selected = shortlist.len(),
            found = selected.len(),
            "shortlist contains ids missing from the catalog"
        );
    }

    DashboardView {
        catalog_count: ranked.len(),
        filtered_count: filtered.len(),
        hero: filtered.first().map(|entry| (*entry).clone()),
        page: filtered.iter().take(page_size).map(|entry| (*entry).clone()).collect(),
        summary: ShortlistSummary::from_entries(&selected),
        shortlist: selected,
    }
}

/// フィルタチップ用の撮影場所一覧（重複なし・ソート済み）
pub fn available_locations(photos: &[Photo]) -> Vec<String> {
    photos
        .iter()
        .map(|p| p.location.clone())
        .filter(|l| !l.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::profile::ClientProfile;
    use crate::ranking::rank;
    use crate::weights::ScoringWeights;

    fn ranked(photos: &[Photo]) -> Vec<RankedEntry<'_>> {
        let weights = ScoringWeights::default().normalize().unwrap();
        rank(photos, &weights, &ClientProfile::default())
    }

    #[test]
    fn test_no_filters_matches_everything() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let view = build_view(&ranked, &FilterState::default(), &Shortlist::new(), 5);

        assert_eq!(view.catalog_count, photos.len());
        assert_eq!(view.filtered_count, photos.len());
        assert_eq!(view.page.len(), 5);
        assert_eq!(view.hero.as_ref().map(|h| &h.photo.id), Some(&ranked[0].photo.id));
    }

    #[test]
    fn test_shot_filter_and_hero() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let mut filters = FilterState::default();
        filters.toggle_shot(ShotType::Detail);

        let view = build_view(&ranked, &filters, &Shortlist::new(), DEFAULT_PAGE_SIZE);
        assert!(view.filtered_count > 0);
        assert!(view.page.iter().all(|e| e.photo.shot_type == ShotType::Detail));

        let first_detail = ranked
            .iter()
            .find(|e| e.photo.shot_type == ShotType::Detail)
            .unwrap();
        assert_eq!(view.hero.unwrap().photo.id, first_detail.photo.id);
    }

    #[test]
    fn test_chips_or_within_and_across() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let mut filters = FilterState::default();
        filters.toggle_shot(ShotType::Portrait);
        filters.toggle_shot(ShotType::Group);
        filters.toggle_mood(Mood::Joyful);

        let view = build_view(&ranked, &filters, &Shortlist::new(), 100);
        for entry in &view.page {
            assert!(matches!(entry.photo.shot_type, ShotType::Portrait | ShotType::Group));
            assert_eq!(entry.photo.mood, Mood::Joyful);
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut filters = FilterState::default();
        assert!(filters.toggle_location("Chapel"));
        assert!(filters.is_active());
        assert!(!filters.toggle_location("Chapel"));
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let filters = FilterState {
            search: "  RING ".to_string(),
            ..Default::default()
        };

        let view = build_view(&ranked, &filters, &Shortlist::new(), 100);
        assert!(view.filtered_count > 0);
        assert!(view.filtered_count < photos.len());
    }

    #[test]
    fn test_no_match_has_no_hero() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let filters = FilterState {
            search: "zzz-no-such-photo".to_string(),
            ..Default::default()
        };

        let view = build_view(&ranked, &filters, &Shortlist::new(), 10);
        assert_eq!(view.filtered_count, 0);
        assert!(view.hero.is_none());
        assert!(view.page.is_empty());
    }

    #[test]
    fn test_shortlist_survives_reranking() {
        let photos = sample_catalog();
        let mut shortlist = Shortlist::new();
        shortlist.toggle(&photos[3].id);
        shortlist.toggle(&photos[7].id);

        let a = ranked(&photos);
        let heavy_alignment = ScoringWeights::new(15.0, 15.0, 70.0).normalize().unwrap();
        let b = rank(&photos, &heavy_alignment, &ClientProfile::default());

        let view_a = build_view(&a, &FilterState::default(), &shortlist, 10);
        let view_b = build_view(&b, &FilterState::default(), &shortlist, 10);
        assert_eq!(view_a.shortlist.len(), 2);
        assert_eq!(view_b.shortlist.len(), 2);
        assert_eq!(view_b.summary.count, 2);
    }

    #[test]
    fn test_show_selected_only() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let shortlist: Shortlist = [photos[0].id.clone()].into_iter().collect();
        let filters = FilterState {
            show_selected_only: true,
            ..Default::default()
        };

        let view = build_view(&ranked, &filters, &shortlist, 10);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.page[0].photo.id, photos[0].id);
    }

    #[test]
    fn test_empty_shortlist_summary_is_zero() {
        let summary = ShortlistSummary::from_entries(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.average_alignment, 0.0);
    }

    #[test]
    fn test_summary_averages() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let picked = &ranked[..2];
        let summary = ShortlistSummary::from_entries(picked);

        let expected = (picked[0].score + picked[1].score) / 2.0;
        assert!((summary.average_score - expected).abs() < 1e-9);
        assert_eq!(summary.mood_counts.values().sum::<usize>(), 2);
        assert_eq!(summary.total_faces, picked[0].photo.faces + picked[1].photo.faces);
    }

    #[test]
    fn test_unknown_shortlist_ids_are_ignored() {
        let photos = sample_catalog();
        let ranked = ranked(&photos);
        let shortlist: Shortlist = ["missing-id"].into_iter().collect();

        let view = build_view(&ranked, &FilterState::default(), &shortlist, 10);
        assert!(view.shortlist.is_empty());
        assert_eq!(view.summary.count, 0);
    }

    #[test]
    fn test_available_locations_sorted_unique() {
        let photos = sample_catalog();
        let locations = available_locations(&photos);
        let mut sorted = locations.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(locations, sorted);
        assert!(!locations.is_empty());
    }
}
