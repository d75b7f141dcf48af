//! 外部APIクライアント

pub mod apples;
