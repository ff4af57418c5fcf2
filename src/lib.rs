//! photo-rank CLI
//!
//! 共通ライブラリのランキングエンジンをターミナルから使うためのモジュール群

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod picker;
pub mod report;
pub mod session;
