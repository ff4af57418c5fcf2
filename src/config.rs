use crate::error::{PhotoRankError, Result};
use photo_rank_common::dashboard::DEFAULT_PAGE_SIZE;
use photo_rank_common::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログJSONのパス（設定ファイルより優先）
pub const CATALOG_ENV: &str = "PHOTO_RANK_CATALOG";
/// プロファイルJSONのパス（設定ファイルより優先）
pub const PROFILE_ENV: &str = "PHOTO_RANK_PROFILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub weights: ScoringWeights,
    pub top_n: usize,
    pub catalog: Option<PathBuf>,
    pub profile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            top_n: DEFAULT_PAGE_SIZE,
            catalog: None,
            profile: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoRankError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-rank").join("config.json"))
    }

    /// カタログのパス（環境変数を優先）
    pub fn catalog_path(&self) -> Option<PathBuf> {
        env_path(CATALOG_ENV).or_else(|| self.catalog.clone())
    }

    /// プロファイルのパス（環境変数を優先）
    pub fn profile_path(&self) -> Option<PathBuf> {
        env_path(PROFILE_ENV).or_else(|| self.profile.clone())
    }

    pub fn set_weights(&mut self, weights: ScoringWeights) -> Result<()> {
        // 保存前に正規化できることを確認
        weights.normalize()?;
        self.weights = weights;
        Ok(())
    }

    pub fn set_top_n(&mut self, top_n: usize) -> Result<()> {
        if top_n == 0 {
            return Err(PhotoRankError::Config("表示件数は1以上にしてください".into()));
        }
        self.top_n = top_n;
        Ok(())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
