//! スコアリング重み
//!
//! スライダー値（生の重み）と、合計1に正規化した重みを分けて扱う。
//! ランキングは正規化済みの `NormalizedWeights` しか受け取らない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// スライダーの下限
pub const SLIDER_MIN: f64 = 15.0;
/// スライダーの上限
pub const SLIDER_MAX: f64 = 70.0;

/// 生の重み（スライダー値）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub technical: f64,
    pub storytelling: f64,
    pub client_alignment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical: 40.0,
            storytelling: 35.0,
            client_alignment: 25.0,
        }
    }
}

impl ScoringWeights {
    pub fn new(technical: f64, storytelling: f64, client_alignment: f64) -> Self {
        Self {
            technical,
            storytelling,
            client_alignment,
        }
    }

    pub fn sum(&self) -> f64 {
        self.technical + self.storytelling + self.client_alignment
    }

    /// 各値をスライダー範囲 [15, 70] に収める
    pub fn clamp_to_slider(&self) -> Self {
        Self {
            technical: self.technical.clamp(SLIDER_MIN, SLIDER_MAX),
            storytelling: self.storytelling.clamp(SLIDER_MIN, SLIDER_MAX),
            client_alignment: self.client_alignment.clamp(SLIDER_MIN, SLIDER_MAX),
        }
    }

    /// 合計1に正規化
    ///
    /// 負値・非有限値・合計0以下はエラー（NaNスコアを伝播させない）
    pub fn normalize(&self) -> Result<NormalizedWeights> {
        let components = [
            ("technical", self.technical),
            ("storytelling", self.storytelling),
            ("clientAlignment", self.client_alignment),
        ];

        for (name, value) in components {
            if !value.is_finite() {
                return Err(Error::InvalidWeights(format!("{} が数値ではありません", name)));
            }
            if value < 0.0 {
                return Err(Error::InvalidWeights(format!("{} が負の値です: {}", name, value)));
            }
        }

        let total = self.sum();
        if total <= 0.0 {
            return Err(Error::InvalidWeights("重みの合計が0です".into()));
        }

        Ok(NormalizedWeights {
            technical: self.technical / total,
            storytelling: self.storytelling / total,
            client_alignment: self.client_alignment / total,
        })
    }
}

/// "40,35,25" 形式
impl FromStr for ScoringWeights {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "Invalid weights: {}. Use technical,storytelling,alignment (e.g. 40,35,25)",
                s
            ));
        }

        let mut values = [0.0f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| format!("Invalid weight value: {}", part))?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for ScoringWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.technical, self.storytelling, self.client_alignment
        )
    }
}

/// 正規化済みの重み（合計1、各値は非負）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedWeights {
    technical: f64,
    storytelling: f64,
    client_alignment: f64,
}

impl NormalizedWeights {
    /// 均等配分（1/3ずつ）
    pub fn uniform() -> Self {
        let third = 1.0 / 3.0;
        Self {
            technical: third,
            storytelling: third,
            client_alignment: third,
        }
    }

    pub fn technical(&self) -> f64 {
        self.technical
    }

    pub fn storytelling(&self) -> f64 {
        self.storytelling
    }

    pub fn client_alignment(&self) -> f64 {
        self.client_alignment
    }

    /// 表示用のパーセント値（technical, storytelling, clientAlignment）
    pub fn as_percentages(&self) -> (f64, f64, f64) {
        (
            self.technical * 100.0,
            self.storytelling * 100.0,
            self.client_alignment * 100.0,
        )
    }
}
