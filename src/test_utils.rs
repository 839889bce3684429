//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::config::TooltipSettings;
use crate::snapshot::ItemSnapshot;

/// テスト用の ItemSnapshot を作成する
///
/// 識別子と表示品質タグ以外はすべてデフォルト値。テスト側で
/// struct-update 構文を使って必要なフィールドだけ上書きする。
pub(crate) fn sample_snapshot() -> ItemSnapshot {
    ItemSnapshot {
        type_id: "item_sample".to_string(),
        display_quality: "NONE".to_string(),
        ..ItemSnapshot::default()
    }
}

/// すべてのトグルを無効にした TooltipSettings を作成する
pub(crate) fn disabled_settings() -> TooltipSettings {
    TooltipSettings {
        show_quality: false,
        show_tags: false,
        show_stackable: false,
        show_durability: false,
        show_value: false,
        show_developer_id: false,
        ..TooltipSettings::default()
    }
}
