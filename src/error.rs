use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoRankError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログに存在しない写真IDです: {0}")]
    UnknownPhoto(String),

    #[error("ショートリストが空です。`--select ID` か `--interactive` で写真を選んでください")]
    EmptyShortlist,

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_rank_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoRankError>;
