//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid range \"{0}\": expected \"<low>-<high>\"")]
    InvalidRange(String),

    #[error("No range configured for {category}.{field}")]
    MissingRange {
        category: &'static str,
        field: &'static str,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
