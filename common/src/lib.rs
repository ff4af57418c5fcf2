//! Photo Rank Common Library
//!
//! CLIとWeb(WASM)で共有されるランキングエンジンとダッシュボードロジック

pub mod types;
pub mod error;
pub mod weights;
pub mod profile;
pub mod ranking;
pub mod dashboard;
pub mod catalog;
pub mod export;

pub use types::{Mood, Photo, PhotoMetrics, ShotType};
pub use error::{Error, Result};
pub use weights::{NormalizedWeights, ScoringWeights};
pub use profile::ClientProfile;
pub use ranking::{rank, RankedEntry, ScoreBreakdown};
pub use dashboard::{build_view, DashboardView, FilterState, Shortlist, ShortlistSummary};
pub use export::ShortlistDelivery;
