//! item-info-engine
//!
//! ゲーム内アイテムのツールチップ向けに、多言語化された情報行を構成するエンジン
//!
//! Given an item attribute snapshot, a set of feature toggles and a display
//! language, [`compose`] produces an ordered block of localized lines plus
//! font-size and color hints for the host renderer.

pub mod catalog;
pub mod compose;
pub mod config;
pub mod snapshot;
mod test_utils;
pub mod types;

// 主要な型を再エクスポート
pub use catalog::TranslationStore;
pub use compose::{
    ComposedOutput,
    compose,
};
pub use config::TooltipSettings;
pub use snapshot::ItemSnapshot;
pub use types::{
    Color,
    Language,
};
