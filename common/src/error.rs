//! エラー型定義
//!
//! このシステムで失敗しうる操作はAPIフェッチだけなので、
//! エラー分類もフェッチ失敗の3種（ネットワーク / HTTPステータス / JSON不正）のみ。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
