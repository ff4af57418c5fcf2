//! 対話式ショートリスト選択モジュール

use crate::error::{PhotoRankError, Result};
use crate::report::format_entry;
use dialoguer::MultiSelect;
use photo_rank_common::{RankedEntry, Shortlist};

/// 選択肢の表示行（ランキング順）
pub fn build_items(ranked: &[RankedEntry<'_>]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| format_entry(i + 1, entry, false).trim_start().to_string())
        .collect()
}

/// 既に選択済みの写真にチェックを付ける
pub fn build_defaults(ranked: &[RankedEntry<'_>], current: &Shortlist) -> Vec<bool> {
    ranked
        .iter()
        .map(|entry| current.contains(&entry.photo.id))
        .collect()
}

/// 選択インデックスからショートリストを作る
pub fn shortlist_from_indices(ranked: &[RankedEntry<'_>], indices: &[usize]) -> Shortlist {
    indices
        .iter()
        .filter_map(|&i| ranked.get(i))
        .map(|entry| entry.photo.id.clone())
        .collect()
}

/// 候補に出なかった選択済みIDを引き継ぐ
///
/// 絞り込みで隠れた写真の選択は解除しない。
pub fn keep_hidden_selection(
    candidates: &[RankedEntry<'_>],
    current: &Shortlist,
    mut picked: Shortlist,
) -> Shortlist {
    for id in current.ids() {
        if !candidates.iter().any(|entry| entry.photo.id == id) {
            picked.insert(id);
        }
    }
    picked
}

/// 対話式で写真を選ぶ（スペースで切り替え、Enterで確定）
pub fn select_interactive(ranked: &[RankedEntry<'_>], current: &Shortlist) -> Result<Shortlist> {
    if ranked.is_empty() {
        println!("⚠ 選択できる写真がありません");
        return Ok(current.clone());
    }

    let items = build_items(ranked);
    let defaults = build_defaults(ranked, current);

    println!("\n📋 納品する写真を選択してください (スペース: 選択, Enter: 確定)\n");

    let indices = MultiSelect::new()
        .with_prompt("ショートリスト")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| PhotoRankError::Prompt(e.to_string()))?;

    let picked = shortlist_from_indices(ranked, &indices);
    Ok(keep_hidden_selection(ranked, current, picked))
}
