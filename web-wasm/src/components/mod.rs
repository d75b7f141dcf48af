//! UIコンポーネント

pub mod header;
pub mod apple_grid;
pub mod detail_modal;
