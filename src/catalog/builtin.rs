//! Built-in per-language translation tables.
//!
//! The tables are fixed data compiled into the crate; they are assembled
//! into maps once when a [`TranslationStore`](super::TranslationStore) is
//! built and never change afterwards.
//!
//! Developer-block labels (`OrderLabel` and friends) are localized only for
//! the Chinese group; every other language resolves them through the English
//! fallback.

use std::collections::HashMap;

use super::keys;
use crate::types::Language;

/// English table. This is the fallback and must cover [`keys::ALL`].
const ENGLISH: &[(&str, &str)] = &[
    (keys::NO_TAGS, "No tags"),
    (keys::NON_STACKABLE, "NonStackable"),
    (keys::STACKABLE, "Stackable ({0})"),
    (keys::DURABILITY_FORMAT, "Durability: {0}/{1}"),
    (keys::QUALITY_LABEL, "Quality: {0}"),
    (keys::TAGS_LABEL, "Tags: {0}"),
    (keys::STATS_LABEL, "Stats: {0}"),
    (keys::SLOTS_LABEL, "Slots: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "Inventory Items: {0}"),
    (keys::VARIABLES_LABEL, "Variables: {0}"),
    (keys::ORDER_LABEL, "Order: {0}"),
    (keys::STACK_COUNT_LABEL, "Count: {0}/{1}"),
    (keys::CAN_BE_SOLD_LABEL, "CanBeSold: {0}"),
    (keys::CAN_DROP_LABEL, "CanDrop: {0}"),
    (keys::HAS_HAND_HELD_AGENT_LABEL, "HasHandHeldAgent: {0}"),
    (keys::IS_BEING_DESTROYED_LABEL, "IsBeingDestroyed: {0}"),
    (keys::DISPLAY_QUALITY_LABEL, "DisplayQuality: {0}"),
];

/// Simplified Chinese table, also used for the generic `Chinese` tag.
const CHINESE_SIMPLIFIED: &[(&str, &str)] = &[
    (keys::NO_TAGS, "无标签"),
    (keys::NON_STACKABLE, "不可堆叠"),
    (keys::STACKABLE, "可堆叠 ({0})"),
    (keys::DURABILITY_FORMAT, "耐久: {0}/{1}"),
    (keys::QUALITY_LABEL, "品质: {0}"),
    (keys::TAGS_LABEL, "标签: {0}"),
    (keys::STATS_LABEL, "属性/状态效果: {0}"),
    (keys::SLOTS_LABEL, "插槽/部件: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "子物品: {0}"),
    (keys::VARIABLES_LABEL, "变量: {0}"),
    (keys::ORDER_LABEL, "Order(优先级？): {0}"),
    (keys::STACK_COUNT_LABEL, "数量: {0}/{1}"),
    (keys::CAN_BE_SOLD_LABEL, "可出售: {0}"),
    (keys::CAN_DROP_LABEL, "可丢弃: {0}"),
    (keys::HAS_HAND_HELD_AGENT_LABEL, "有手持代理: {0}"),
    (keys::IS_BEING_DESTROYED_LABEL, "正在销毁: {0}"),
    (keys::DISPLAY_QUALITY_LABEL, "显示品质: {0}"),
];

/// Traditional Chinese table. Developer labels are shared with the rest of
/// the Chinese group.
const CHINESE_TRADITIONAL: &[(&str, &str)] = &[
    (keys::NO_TAGS, "無標籤"),
    (keys::NON_STACKABLE, "不可堆疊"),
    (keys::STACKABLE, "可堆疊 ({0})"),
    (keys::DURABILITY_FORMAT, "耐久: {0}/{1}"),
    (keys::QUALITY_LABEL, "品質: {0}"),
    (keys::TAGS_LABEL, "標籤: {0}"),
    (keys::STATS_LABEL, "屬性/狀態效果: {0}"),
    (keys::SLOTS_LABEL, "插槽/部件: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "子物品: {0}"),
    (keys::VARIABLES_LABEL, "變量: {0}"),
    (keys::ORDER_LABEL, "Order(优先级？): {0}"),
    (keys::STACK_COUNT_LABEL, "数量: {0}/{1}"),
    (keys::CAN_BE_SOLD_LABEL, "可出售: {0}"),
    (keys::CAN_DROP_LABEL, "可丢弃: {0}"),
    (keys::HAS_HAND_HELD_AGENT_LABEL, "有手持代理: {0}"),
    (keys::IS_BEING_DESTROYED_LABEL, "正在销毁: {0}"),
    (keys::DISPLAY_QUALITY_LABEL, "显示品质: {0}"),
];

/// Japanese table.
const JAPANESE: &[(&str, &str)] = &[
    (keys::NO_TAGS, "タグなし"),
    (keys::NON_STACKABLE, "スタック不可"),
    (keys::STACKABLE, "スタック可能 ({0})"),
    (keys::DURABILITY_FORMAT, "耐久: {0}/{1}"),
    (keys::QUALITY_LABEL, "品質: {0}"),
    (keys::TAGS_LABEL, "タグ: {0}"),
    (keys::STATS_LABEL, "ステータス/効果: {0}"),
    (keys::SLOTS_LABEL, "スロット/部品: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "内部アイテム: {0}"),
    (keys::VARIABLES_LABEL, "変数: {0}"),
];

/// Korean table.
const KOREAN: &[(&str, &str)] = &[
    (keys::NO_TAGS, "태그 없음"),
    (keys::NON_STACKABLE, "비축불가"),
    (keys::STACKABLE, "쌓을 수 있음 ({0})"),
    (keys::DURABILITY_FORMAT, "내구도: {0}/{1}"),
    (keys::QUALITY_LABEL, "품질: {0}"),
    (keys::TAGS_LABEL, "태그: {0}"),
    (keys::STATS_LABEL, "스탯/효과: {0}"),
    (keys::SLOTS_LABEL, "슬롯/부품: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "내부 아이템: {0}"),
    (keys::VARIABLES_LABEL, "변수: {0}"),
];

/// French table.
const FRENCH: &[(&str, &str)] = &[
    (keys::NO_TAGS, "Aucun tag"),
    (keys::NON_STACKABLE, "Non empilable"),
    (keys::STACKABLE, "Empilable ({0})"),
    (keys::DURABILITY_FORMAT, "Durabilité: {0}/{1}"),
    (keys::QUALITY_LABEL, "Qualité: {0}"),
    (keys::TAGS_LABEL, "Tags: {0}"),
    (keys::STATS_LABEL, "Stats/effets: {0}"),
    (keys::SLOTS_LABEL, "Emplacements/parties: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "Objets internes: {0}"),
    (keys::VARIABLES_LABEL, "Variables: {0}"),
];

/// Russian table.
const RUSSIAN: &[(&str, &str)] = &[
    (keys::NO_TAGS, "Без тегов"),
    (keys::NON_STACKABLE, "Не складывается"),
    (keys::STACKABLE, "Можно сложить ({0})"),
    (keys::DURABILITY_FORMAT, "Прочность: {0}/{1}"),
    (keys::QUALITY_LABEL, "Качество: {0}"),
    (keys::TAGS_LABEL, "Теги: {0}"),
    (keys::STATS_LABEL, "Статы/эффекты: {0}"),
    (keys::SLOTS_LABEL, "Слоты/детали: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "Вложенные предметы: {0}"),
    (keys::VARIABLES_LABEL, "Переменные: {0}"),
];

/// German table.
const GERMAN: &[(&str, &str)] = &[
    (keys::NO_TAGS, "Keine Tags"),
    (keys::NON_STACKABLE, "Nicht stapelbar"),
    (keys::STACKABLE, "Stapeln ({0})"),
    (keys::DURABILITY_FORMAT, "Haltbarkeit: {0}/{1}"),
    (keys::QUALITY_LABEL, "Qualität: {0}"),
    (keys::TAGS_LABEL, "Tags: {0}"),
    (keys::STATS_LABEL, "Stats/Effekte: {0}"),
    (keys::SLOTS_LABEL, "Slots/Teile: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "Interne Gegenstände: {0}"),
    (keys::VARIABLES_LABEL, "Variablen: {0}"),
];

/// Spanish table.
const SPANISH: &[(&str, &str)] = &[
    (keys::NO_TAGS, "Sin etiquetas"),
    (keys::NON_STACKABLE, "No apilable"),
    (keys::STACKABLE, "Apilable ({0})"),
    (keys::DURABILITY_FORMAT, "Durabilidad: {0}/{1}"),
    (keys::QUALITY_LABEL, "Calidad: {0}"),
    (keys::TAGS_LABEL, "Etiquetas: {0}"),
    (keys::STATS_LABEL, "Stats/efectos: {0}"),
    (keys::SLOTS_LABEL, "Ranuras/partes: {0}"),
    (keys::INVENTORY_ITEMS_LABEL, "Objetos internos: {0}"),
    (keys::VARIABLES_LABEL, "Variables: {0}"),
];

/// Returns the built-in entries for one language.
const fn entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Chinese | Language::ChineseSimplified => CHINESE_SIMPLIFIED,
        Language::ChineseTraditional => CHINESE_TRADITIONAL,
        Language::English => ENGLISH,
        Language::Japanese => JAPANESE,
        Language::Korean => KOREAN,
        Language::French => FRENCH,
        Language::Russian => RUSSIAN,
        Language::German => GERMAN,
        Language::Spanish => SPANISH,
    }
}

/// Builds the full language → key → template map.
pub(super) fn tables() -> HashMap<Language, HashMap<String, String>> {
    Language::all()
        .iter()
        .map(|&language| {
            let table = entries(language)
                .iter()
                .map(|&(key, template)| (key.to_string(), template.to_string()))
                .collect();
            (language, table)
        })
        .collect()
}
