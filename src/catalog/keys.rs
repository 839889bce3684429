//! The closed set of message keys used by the line composer.
//!
//! Keys are stable across languages: the same key resolves to a different
//! template per language table. Every key listed here must exist in the
//! English (fallback) table; [`ALL`](self::ALL) backs the coverage check in
//! `TranslationStore::verify_fallback_coverage`.

/// "No tags" placeholder message.
pub const NO_TAGS: &str = "NoTags";
/// Non-stackable item message.
pub const NON_STACKABLE: &str = "NonStackable";
/// Stackable item template: `{0}` = max stack count.
pub const STACKABLE: &str = "Stackable";
/// Durability template: `{0}` = current, `{1}` = max.
pub const DURABILITY_FORMAT: &str = "DurabilityFormat";
/// Quality label template: `{0}` = star-suffixed quality.
pub const QUALITY_LABEL: &str = "QualityLabel";
/// Tags label template: `{0}` = joined tag list.
pub const TAGS_LABEL: &str = "TagsLabel";

/// Stats count template (developer block): `{0}` = count.
pub const STATS_LABEL: &str = "StatsLabel";
/// Slots count template (developer block): `{0}` = count.
pub const SLOTS_LABEL: &str = "SlotsLabel";
/// Nested inventory count template (developer block): `{0}` = count.
pub const INVENTORY_ITEMS_LABEL: &str = "InventoryItemsLabel";
/// Variables count template (developer block): `{0}` = count.
pub const VARIABLES_LABEL: &str = "VariablesLabel";

/// Order / priority template (developer block): `{0}` = order value.
pub const ORDER_LABEL: &str = "OrderLabel";
/// Stack count template (developer block): `{0}` = current, `{1}` = max.
pub const STACK_COUNT_LABEL: &str = "StackCountLabel";
/// Sellable flag template (developer block): `{0}` = boolean token.
pub const CAN_BE_SOLD_LABEL: &str = "CanBeSoldLabel";
/// Droppable flag template (developer block): `{0}` = boolean token.
pub const CAN_DROP_LABEL: &str = "CanDropLabel";
/// Hand-held-agent flag template (developer block): `{0}` = boolean token.
pub const HAS_HAND_HELD_AGENT_LABEL: &str = "HasHandHeldAgentLabel";
/// Being-destroyed flag template (developer block): `{0}` = boolean token.
pub const IS_BEING_DESTROYED_LABEL: &str = "IsBeingDestroyedLabel";
/// Display quality template (developer block): `{0}` = display quality tag.
pub const DISPLAY_QUALITY_LABEL: &str = "DisplayQualityLabel";

/// Every key the composer may request, for fallback coverage checks.
pub const ALL: &[&str] = &[
    NO_TAGS,
    NON_STACKABLE,
    STACKABLE,
    DURABILITY_FORMAT,
    QUALITY_LABEL,
    TAGS_LABEL,
    STATS_LABEL,
    SLOTS_LABEL,
    INVENTORY_ITEMS_LABEL,
    VARIABLES_LABEL,
    ORDER_LABEL,
    STACK_COUNT_LABEL,
    CAN_BE_SOLD_LABEL,
    CAN_DROP_LABEL,
    HAS_HAND_HELD_AGENT_LABEL,
    IS_BEING_DESTROYED_LABEL,
    DISPLAY_QUALITY_LABEL,
];
