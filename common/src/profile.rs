//! クライアント嗜好プロファイル

use crate::error::Result;
use crate::types::{Mood, ShotType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// クライアントの好み
///
/// 空の集合は「制約なし」。`minimum_faces` が0なら人数制約なし。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProfile {
    pub preferred_moods: BTreeSet<Mood>,
    pub required_shots: BTreeSet<ShotType>,
    pub highlight_tags: BTreeSet<String>,
    pub minimum_faces: u32,
}

impl ClientProfile {
    pub fn with_moods(mut self, moods: impl IntoIterator<Item = Mood>) -> Self {
        self.preferred_moods.extend(moods);
        self
    }

    pub fn with_shots(mut self, shots: impl IntoIterator<Item = ShotType>) -> Self {
        self.required_shots.extend(shots);
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn with_minimum_faces(mut self, faces: u32) -> Self {
        self.minimum_faces = faces;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_moods.is_empty()
            && self.required_shots.is_empty()
            && self.highlight_tags.is_empty()
            && self.minimum_faces == 0
    }

    /// ムードのチップ切り替え。切り替え後に含まれていればtrue
    pub fn toggle_mood(&mut self, mood: Mood) -> bool {
        toggle(&mut self.preferred_moods, mood)
    }

    pub fn toggle_shot(&mut self, shot: ShotType) -> bool {
        toggle(&mut self.required_shots, shot)
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            return false;
        }
        toggle(&mut self.highlight_tags, tag)
    }

    /// ハイライトタグを追加（空白のみは無視）
    pub fn add_tag<S: Into<String>>(&mut self, tag: S) {
        let tag = tag.into();
        let tag = tag.trim();
        if !tag.is_empty() {
            self.highlight_tags.insert(tag.to_string());
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        Ok(profile)
    }

    /// JSONファイルから読み込み（wasm32以外）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// 集合のトグル（あれば削除、なければ追加）。切り替え後の所属を返す
pub(crate) fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
