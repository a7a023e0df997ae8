use thiserror::Error;

#[derive(Error, Debug)]
pub enum VintedFitError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("設定ファイルが見つかりません。`--config PATH` で指定するか ./config.json を作成してください（探索: {0}）")]
    ConfigNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("APIが異常なステータスを返しました: {status} ({url})")]
    ApiStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] vinted_fit_common::Error),
}

pub type Result<T> = std::result::Result<T, VintedFitError>;
