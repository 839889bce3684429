//! Read-only item attribute snapshot.

/// Attribute view of one item at the moment of composition.
///
/// The host UI owns the item; the engine only reads this snapshot and never
/// mutates it. A fresh snapshot is supplied on every hover event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemSnapshot {
    /// Item type identifier, shown raw in the developer block.
    pub type_id: String,
    /// Ordering / priority value used by the host's item lists.
    pub order: i32,

    /// Whether the item participates in stacking at all.
    pub stackable: bool,
    /// Current stack count.
    pub stack_count: u32,
    /// Maximum stack count. `<= 1` means the item is non-stackable.
    pub max_stack_count: u32,

    /// Whether the item may appear in shops.
    pub can_be_sold: bool,
    /// Whether the player may drop the item.
    pub can_drop: bool,
    /// Whether the item has a dedicated hand-held agent.
    pub has_hand_held_agent: bool,
    /// Whether the item is currently in the middle of destruction.
    pub is_being_destroyed: bool,

    /// Whether the durability system is active for this item.
    pub uses_durability: bool,
    /// Current durability.
    pub durability: f32,
    /// Maximum durability; `None` when the host cannot supply it.
    pub max_durability: Option<f32>,

    /// Display quality tag used by the host UI (often "NONE").
    pub display_quality: String,
    /// Numeric quality, clamped to `0..=9` for display.
    pub quality: i32,

    /// Tag collection; `None` when the host has no tag data for the item.
    pub tags: Option<Vec<String>>,

    /// Total raw value of the item (before the display halving).
    pub raw_value: f32,
    /// Self weight in kilograms.
    pub self_weight: f32,

    /// Number of stats / status effects attached to the item.
    pub stats_count: usize,
    /// Number of slots / parts attached to the item.
    pub slots_count: usize,
    /// Number of items nested inside (containers).
    pub inventory_count: usize,
    /// Number of custom variables attached to the item.
    pub variables_count: usize,

    /// Associated sound key, if any.
    pub sound_key: Option<String>,
}
