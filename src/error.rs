use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormMatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フィールド引数が不正です: {0}（--フィールド名=値 の形式で指定してください）")]
    InvalidFieldArg(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] form_matcher_common::Error),
}

pub type Result<T> = std::result::Result<T, FormMatcherError>;
