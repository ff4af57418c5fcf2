//! ターミナル表示

use photo_rank_common::{DashboardView, NormalizedWeights, Photo, RankedEntry, ShortlistSummary};
use photo_rank_common::{Mood, ShotType};
use std::collections::BTreeMap;

/// ランキング1行（"  1. 0.812  ph-003  First look ... [Portrait/Romantic]"）
pub fn format_entry(position: usize, entry: &RankedEntry<'_>, selected: bool) -> String {
    let mark = if selected { "★" } else { " " };
    format!(
        "{}{:>3}. {:.3}  {:<8} {} [{}/{}, {}人, {}]",
        mark,
        position,
        entry.score,
        entry.photo.id,
        entry.photo.title,
        entry.photo.shot_type,
        entry.photo.mood,
        entry.photo.faces,
        if entry.photo.location.is_empty() { "-" } else { entry.photo.location.as_str() },
    )
}

/// スコア内訳（--explain）
pub fn format_breakdown(entry: &RankedEntry<'_>) -> String {
    let b = &entry.breakdown;
    let mut signals = Vec::new();
    if b.mood_matched {
        signals.push("ムード一致".to_string());
    }
    if b.matched_tags > 0 {
        signals.push(format!("タグ一致{}件", b.matched_tags));
    }
    if b.shot_penalized {
        signals.push("ショット不一致".to_string());
    }
    if b.face_penalized {
        signals.push("人数不足".to_string());
    }

    format!(
        "        技術 {:.3} + ストーリー {:.3} + 適合 {:.3} (サブスコア {:.3}){}",
        b.technical,
        b.storytelling,
        b.client_alignment,
        b.alignment_subscore,
        if signals.is_empty() {
            String::new()
        } else {
            format!("  {}", signals.join(" / "))
        }
    )
}

pub fn format_weights(weights: &NormalizedWeights) -> String {
    let (t, s, a) = weights.as_percentages();
    format!("技術 {:.0}% / ストーリー {:.0}% / 適合 {:.0}%", t, s, a)
}

pub fn format_summary(summary: &ShortlistSummary) -> String {
    if summary.count == 0 {
        return "ショートリスト: 0枚".to_string();
    }

    let moods: Vec<String> = summary
        .mood_counts
        .iter()
        .map(|(mood, count)| format!("{} {}", mood, count))
        .collect();

    format!(
        "ショートリスト: {}枚 / 平均スコア {:.3} / 平均適合 {:.3} / 人数計 {} / {}",
        summary.count,
        summary.average_score,
        summary.average_alignment,
        summary.total_faces,
        moods.join(", ")
    )
}

/// ダッシュボード表示（ヒーロー + ページ）
pub fn print_view(view: &DashboardView<'_>, explain: bool) {
    println!("表示: {} / {}枚", view.page.len(), view.filtered_count);
    if view.filtered_count < view.catalog_count {
        println!("  (絞り込み前: {}枚)", view.catalog_count);
    }

    match &view.hero {
        Some(hero) => {
            println!("\n🏆 ヒーロー候補: {} ({:.3})", hero.photo.title, hero.score);
            if !hero.photo.client_notes.is_empty() {
                let notes: Vec<&str> = hero.photo.client_notes.iter().map(String::as_str).collect();
                println!("   メモ: {}", notes.join(" / "));
            }
        }
        None => {
            println!("\n条件に一致する写真がありません");
            return;
        }
    }

    println!();
    for (i, entry) in view.page.iter().enumerate() {
        let selected = view.shortlist.iter().any(|s| s.photo.id == entry.photo.id);
        println!("{}", format_entry(i + 1, entry, selected));
        if explain {
            println!("{}", format_breakdown(entry));
        }
    }
}

/// カタログの内訳
pub fn print_catalog_overview(photos: &[Photo]) {
    let mut by_shot: BTreeMap<ShotType, usize> = BTreeMap::new();
    let mut by_mood: BTreeMap<Mood, usize> = BTreeMap::new();
    let mut by_location: BTreeMap<&str, usize> = BTreeMap::new();

    for photo in photos {
        *by_shot.entry(photo.shot_type).or_insert(0) += 1;
        *by_mood.entry(photo.mood).or_insert(0) += 1;
        let location = if photo.location.is_empty() { "-" } else { photo.location.as_str() };
        *by_location.entry(location).or_insert(0) += 1;
    }

    println!("写真: {}枚", photos.len());
    println!("\nショット種別:");
    for (shot, count) in &by_shot {
        println!("  {:<10} {}", shot.to_string(), count);
    }
    println!("\nムード:");
    for (mood, count) in &by_mood {
        println!("  {:<10} {}", mood.to_string(), count);
    }
    println!("\n撮影場所:");
    for (location, count) in &by_location {
        println!("  {:<16} {}", location, count);
    }
}
