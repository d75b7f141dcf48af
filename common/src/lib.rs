//! Apple Gallery Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;

pub use types::AppleRecord;
pub use error::{Error, Result};
pub use parser::parse_apples_response;
