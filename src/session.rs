//! ランキング入力の解決
//!
//! CLIフラグ > 環境変数 > 設定ファイル > 組み込みサンプル の順で
//! カタログ・重み・プロファイル・フィルタを決める。

use crate::cli::RankingArgs;
use crate::config::Config;
use crate::error::{PhotoRankError, Result};
use photo_rank_common::catalog;
use photo_rank_common::{
    rank, ClientProfile, FilterState, NormalizedWeights, Photo, RankedEntry, ScoringWeights,
    Shortlist,
};
use std::path::Path;

/// 解決済みのランキング入力
#[derive(Debug, Clone)]
pub struct Session {
    pub photos: Vec<Photo>,
    pub weights: ScoringWeights,
    pub normalized: NormalizedWeights,
    pub profile: ClientProfile,
    pub filters: FilterState,
}

impl Session {
    pub fn resolve(args: &RankingArgs, config: &Config) -> Result<Self> {
        let photos = match args.catalog.clone().or_else(|| config.catalog_path()) {
            Some(path) => load_catalog(&path)?,
            None => {
                tracing::debug!("no catalog configured, using the built-in sample");
                catalog::sample_catalog()
            }
        };

        let weights = args.weights.unwrap_or(config.weights);
        let normalized = weights.normalize()?;

        let mut profile = if args.sample_profile {
            catalog::sample_profile()
        } else {
            match args.profile.clone().or_else(|| config.profile_path()) {
                Some(path) => load_profile(&path)?,
                None => ClientProfile::default(),
            }
        };
        profile = profile
            .with_moods(args.moods.iter().copied())
            .with_shots(args.shots.iter().copied())
            .with_tags(args.tags.iter().cloned());
        if let Some(min_faces) = args.min_faces {
            profile.minimum_faces = min_faces;
        }

        let filters = FilterState {
            shot_types: args.filter_shots.iter().copied().collect(),
            moods: args.filter_moods.iter().copied().collect(),
            locations: args.filter_locations.iter().cloned().collect(),
            search: args.search.clone().unwrap_or_default(),
            show_selected_only: false,
        };

        tracing::debug!(
            photos = photos.len(),
            weights = %weights,
            profile_empty = profile.is_empty(),
            filters_active = filters.is_active(),
            "session resolved"
        );

        Ok(Self {
            photos,
            weights,
            normalized,
            profile,
            filters,
        })
    }

    pub fn rank(&self) -> Vec<RankedEntry<'_>> {
        rank(&self.photos, &self.normalized, &self.profile)
    }

    /// IDからショートリストを作成（カタログにないIDはエラー）
    pub fn shortlist_from_ids(&self, ids: &[String]) -> Result<Shortlist> {
        let mut shortlist = Shortlist::new();
        for id in ids {
            let id = id.trim();
            if !self.photos.iter().any(|p| p.id == id) {
                return Err(PhotoRankError::UnknownPhoto(id.to_string()));
            }
            shortlist.insert(id);
        }
        Ok(shortlist)
    }
}

fn load_catalog(path: &Path) -> Result<Vec<Photo>> {
    if !path.exists() {
        return Err(PhotoRankError::FileNotFound(path.display().to_string()));
    }
    Ok(catalog::from_file(path)?)
}

fn load_profile(path: &Path) -> Result<ClientProfile> {
    if !path.exists() {
        return Err(PhotoRankError::FileNotFound(path.display().to_string()));
    }
    Ok(ClientProfile::from_file(path)?)
}
