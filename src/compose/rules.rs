//! The ordered field-rule list.
//!
//! Each rule is a (predicate, renderer) pair producing at most one line.
//! The slice order is the visual line order; rules whose predicate fails are
//! skipped entirely and never emit blank lines.

use super::format;
use crate::catalog::{
    TranslationStore,
    keys,
};
use crate::config::TooltipSettings;
use crate::snapshot::ItemSnapshot;
use crate::types::Language;

/// One tooltip line rule.
pub(super) struct FieldRule {
    /// Rule name, for diagnostics.
    pub(super) name: &'static str,
    /// Whether the rule emits a line for this snapshot and settings.
    pub(super) applies: fn(&ItemSnapshot, &TooltipSettings) -> bool,
    /// Renders the line. Only called when `applies` returned true.
    pub(super) render: fn(&TranslationStore, &ItemSnapshot, Language) -> String,
}

/// Every rule, in visual order: developer block first, then quality, tags,
/// stackable, durability and the value lines.
pub(super) const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        name: "dev_type_id",
        applies: |_, settings| settings.show_developer_id,
        render: render_type_id,
    },
    FieldRule {
        name: "dev_order",
        applies: |_, settings| settings.show_developer_id,
        render: render_order,
    },
    FieldRule {
        name: "dev_stack_count",
        applies: |snapshot, settings| settings.show_developer_id && snapshot.stackable,
        render: render_stack_count,
    },
    FieldRule {
        name: "dev_can_be_sold",
        applies: |_, settings| settings.show_developer_id,
        render: render_can_be_sold,
    },
    FieldRule {
        name: "dev_can_drop",
        applies: |_, settings| settings.show_developer_id,
        render: render_can_drop,
    },
    FieldRule {
        name: "dev_hand_held_agent",
        applies: |_, settings| settings.show_developer_id,
        render: render_hand_held_agent,
    },
    FieldRule {
        name: "dev_being_destroyed",
        applies: |_, settings| settings.show_developer_id,
        render: render_being_destroyed,
    },
    FieldRule {
        name: "dev_sound_key",
        applies: |snapshot, settings| settings.show_developer_id && has_sound_key(snapshot),
        render: render_sound_key,
    },
    FieldRule {
        name: "dev_display_quality",
        applies: |_, settings| settings.show_developer_id,
        render: render_display_quality,
    },
    FieldRule {
        name: "dev_stats_count",
        applies: |snapshot, settings| settings.show_developer_id && snapshot.stats_count > 0,
        render: render_stats_count,
    },
    FieldRule {
        name: "dev_slots_count",
        applies: |snapshot, settings| settings.show_developer_id && snapshot.slots_count > 0,
        render: render_slots_count,
    },
    FieldRule {
        name: "dev_inventory_count",
        applies: |snapshot, settings| settings.show_developer_id && snapshot.inventory_count > 0,
        render: render_inventory_count,
    },
    FieldRule {
        name: "dev_variables_count",
        applies: |snapshot, settings| settings.show_developer_id && snapshot.variables_count > 0,
        render: render_variables_count,
    },
    FieldRule {
        name: "quality",
        applies: |_, settings| settings.show_quality,
        render: render_quality,
    },
    FieldRule {
        name: "tags",
        applies: |_, settings| settings.show_tags,
        render: render_tags,
    },
    FieldRule {
        name: "stackable",
        applies: |_, settings| settings.show_stackable,
        render: render_stackable,
    },
    FieldRule {
        name: "durability",
        applies: |snapshot, settings| settings.show_durability && snapshot.uses_durability,
        render: render_durability,
    },
    FieldRule {
        name: "value",
        applies: |snapshot, settings| settings.show_value && snapshot.raw_value > 0.0,
        render: render_value,
    },
    FieldRule {
        name: "value_per_kg",
        applies: |snapshot, settings| {
            settings.show_value && snapshot.raw_value > 0.0 && snapshot.self_weight > 0.0
        },
        render: render_value_per_kg,
    },
];

/// Evaluates every rule in order and collects the emitted lines.
pub(super) fn evaluate(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    settings: &TooltipSettings,
    language: Language,
) -> Vec<String> {
    FIELD_RULES
        .iter()
        .filter(|rule| (rule.applies)(snapshot, settings))
        .map(|rule| (rule.render)(store, snapshot, language))
        .collect()
}

/// Whether the snapshot carries a non-blank sound key.
fn has_sound_key(snapshot: &ItemSnapshot) -> bool {
    snapshot.sound_key.as_deref().is_some_and(|key| !key.trim().is_empty())
}

/// Raw, unlocalized type identifier line.
fn render_type_id(_: &TranslationStore, snapshot: &ItemSnapshot, _: Language) -> String {
    format!("ID: {}", snapshot.type_id)
}

/// Localized order / priority line.
fn render_order(store: &TranslationStore, snapshot: &ItemSnapshot, language: Language) -> String {
    store.format(language, keys::ORDER_LABEL, &[&snapshot.order])
}

/// Localized "current/max" stack count line.
fn render_stack_count(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(
        language,
        keys::STACK_COUNT_LABEL,
        &[&snapshot.stack_count, &snapshot.max_stack_count],
    )
}

/// Localized sellable flag line.
fn render_can_be_sold(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    let token = TranslationStore::format_bool(language, snapshot.can_be_sold);
    store.format(language, keys::CAN_BE_SOLD_LABEL, &[&token])
}

/// Localized droppable flag line.
fn render_can_drop(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    let token = TranslationStore::format_bool(language, snapshot.can_drop);
    store.format(language, keys::CAN_DROP_LABEL, &[&token])
}

/// Localized hand-held-agent flag line.
fn render_hand_held_agent(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    let token = TranslationStore::format_bool(language, snapshot.has_hand_held_agent);
    store.format(language, keys::HAS_HAND_HELD_AGENT_LABEL, &[&token])
}

/// Localized being-destroyed flag line.
fn render_being_destroyed(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    let token = TranslationStore::format_bool(language, snapshot.is_being_destroyed);
    store.format(language, keys::IS_BEING_DESTROYED_LABEL, &[&token])
}

/// Raw, unlocalized sound key line.
fn render_sound_key(_: &TranslationStore, snapshot: &ItemSnapshot, _: Language) -> String {
    format!("SoundKey: {}", snapshot.sound_key.as_deref().unwrap_or_default())
}

/// Localized display-quality line.
fn render_display_quality(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(language, keys::DISPLAY_QUALITY_LABEL, &[&snapshot.display_quality])
}

/// Localized stats count line.
fn render_stats_count(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(language, keys::STATS_LABEL, &[&snapshot.stats_count])
}

/// Localized slots count line.
fn render_slots_count(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(language, keys::SLOTS_LABEL, &[&snapshot.slots_count])
}

/// Localized nested inventory count line.
fn render_inventory_count(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(language, keys::INVENTORY_ITEMS_LABEL, &[&snapshot.inventory_count])
}

/// Localized variables count line.
fn render_variables_count(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    store.format(language, keys::VARIABLES_LABEL, &[&snapshot.variables_count])
}

/// Localized quality line with the clamped star value.
fn render_quality(store: &TranslationStore, snapshot: &ItemSnapshot, language: Language) -> String {
    store.format(language, keys::QUALITY_LABEL, &[&format::quality_stars(snapshot.quality)])
}

/// Localized tags line, falling back to the "no tags" message.
fn render_tags(store: &TranslationStore, snapshot: &ItemSnapshot, language: Language) -> String {
    let tags = format::join_tags(snapshot.tags.as_deref())
        .unwrap_or_else(|| store.resolve(language, keys::NO_TAGS).to_string());
    store.format(language, keys::TAGS_LABEL, &[&tags])
}

/// Localized stackable / non-stackable line.
fn render_stackable(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    if snapshot.max_stack_count <= 1 {
        store.resolve(language, keys::NON_STACKABLE).to_string()
    } else {
        store.format(language, keys::STACKABLE, &[&snapshot.max_stack_count])
    }
}

/// Localized "current/max" durability line.
///
/// When max durability is unavailable the current value is substituted into
/// both positions; the line is never omitted once its gate passed.
fn render_durability(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    language: Language,
) -> String {
    let current = format::display_number(snapshot.durability);

    match snapshot.max_durability {
        Some(max) => {
            let max = format::display_number(max);
            store.format(language, keys::DURABILITY_FORMAT, &[&current, &max])
        }
        None => {
            tracing::warn!(
                item = %snapshot.type_id,
                "max durability unavailable, substituting current durability"
            );
            store.format(language, keys::DURABILITY_FORMAT, &[&current, &current])
        }
    }
}

/// Raw primary value line: half the total raw value.
fn render_value(_: &TranslationStore, snapshot: &ItemSnapshot, _: Language) -> String {
    format!("${}", format::display_number(snapshot.raw_value / 2.0))
}

/// Raw value-per-weight line, thousands-grouped with no decimals.
fn render_value_per_kg(_: &TranslationStore, snapshot: &ItemSnapshot, _: Language) -> String {
    let halved = snapshot.raw_value / 2.0;
    format!("${}/kg", format::group_thousands(halved / snapshot.self_weight))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{
        disabled_settings,
        sample_snapshot,
    };

    /// Evaluates against the built-in store with English.
    fn lines(snapshot: &ItemSnapshot, settings: &TooltipSettings) -> Vec<String> {
        let store = TranslationStore::builtin();
        evaluate(&store, snapshot, settings, Language::English)
    }

    #[rstest]
    fn rule_names_are_unique() {
        for (i, a) in FIELD_RULES.iter().enumerate() {
            for b in FIELD_RULES.iter().skip(i + 1) {
                assert_that!(a.name, not(eq(b.name)));
            }
        }
    }

    #[rstest]
    fn no_settings_no_lines() {
        let result = lines(&sample_snapshot(), &disabled_settings());

        assert_that!(result, is_empty());
    }

    #[rstest]
    #[case::clamped_low(-1, "Quality: 0★")]
    #[case::clamped_high(15, "Quality: 9★")]
    #[case::in_range(4, "Quality: 4★")]
    fn quality_rule_clamps(#[case] quality: i32, #[case] expected: &str) {
        let snapshot = ItemSnapshot { quality, ..sample_snapshot() };
        let settings = TooltipSettings { show_quality: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq(expected)]);
    }

    #[rstest]
    fn tags_rule_joins_tags() {
        let snapshot = ItemSnapshot {
            tags: Some(vec!["Weapon".to_string(), "Rare".to_string()]),
            ..sample_snapshot()
        };
        let settings = TooltipSettings { show_tags: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("Tags: Weapon, Rare")]);
    }

    #[rstest]
    #[case::empty_collection(Some(vec![]))]
    #[case::absent_collection(None)]
    fn tags_rule_falls_back_to_no_tags(#[case] tags: Option<Vec<String>>) {
        let snapshot = ItemSnapshot { tags, ..sample_snapshot() };
        let settings = TooltipSettings { show_tags: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("Tags: No tags")]);
    }

    #[rstest]
    #[case::non_stackable(1, "NonStackable")]
    #[case::stackable(10, "Stackable (10)")]
    fn stackable_rule_switches_on_max_stack(#[case] max_stack_count: u32, #[case] expected: &str) {
        let snapshot = ItemSnapshot { max_stack_count, ..sample_snapshot() };
        let settings = TooltipSettings { show_stackable: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq(expected)]);
    }

    #[rstest]
    fn durability_rule_formats_current_and_max() {
        let snapshot = ItemSnapshot {
            uses_durability: true,
            durability: 5.0,
            max_durability: Some(10.0),
            ..sample_snapshot()
        };
        let settings = TooltipSettings { show_durability: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("Durability: 5/10")]);
    }

    #[rstest]
    fn durability_rule_substitutes_current_when_max_unavailable() {
        let snapshot = ItemSnapshot {
            uses_durability: true,
            durability: 5.0,
            max_durability: None,
            ..sample_snapshot()
        };
        let settings = TooltipSettings { show_durability: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("Durability: 5/5")]);
    }

    #[rstest]
    fn durability_rule_skipped_when_system_inactive() {
        let snapshot = ItemSnapshot { uses_durability: false, ..sample_snapshot() };
        let settings = TooltipSettings { show_durability: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), is_empty());
    }

    #[rstest]
    fn value_rules_emit_halved_value_and_per_kg() {
        let snapshot =
            ItemSnapshot { raw_value: 100.0, self_weight: 2.0, ..sample_snapshot() };
        let settings = TooltipSettings { show_value: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("$50"), eq("$25/kg")]);
    }

    #[rstest]
    fn value_per_kg_groups_thousands() {
        // Halved value 24690 over 2 kg: 12345 per kg.
        let snapshot =
            ItemSnapshot { raw_value: 49380.0, self_weight: 2.0, ..sample_snapshot() };
        let settings = TooltipSettings { show_value: true, ..disabled_settings() };

        assert_that!(
            lines(&snapshot, &settings),
            elements_are![eq("$24690"), eq("$12,345/kg")]
        );
    }

    #[rstest]
    fn value_per_kg_skipped_without_weight() {
        let snapshot =
            ItemSnapshot { raw_value: 100.0, self_weight: 0.0, ..sample_snapshot() };
        let settings = TooltipSettings { show_value: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), elements_are![eq("$50")]);
    }

    #[rstest]
    fn value_rules_skipped_for_worthless_items() {
        let snapshot = ItemSnapshot { raw_value: 0.0, ..sample_snapshot() };
        let settings = TooltipSettings { show_value: true, ..disabled_settings() };

        assert_that!(lines(&snapshot, &settings), is_empty());
    }

    #[rstest]
    fn developer_block_emits_fixed_order() {
        let snapshot = ItemSnapshot {
            type_id: "rifle_ak".to_string(),
            order: 7,
            stackable: true,
            stack_count: 3,
            max_stack_count: 20,
            can_be_sold: true,
            can_drop: false,
            sound_key: Some("sfx_metal".to_string()),
            display_quality: "NONE".to_string(),
            stats_count: 3,
            ..sample_snapshot()
        };
        let settings = TooltipSettings { show_developer_id: true, ..disabled_settings() };

        assert_that!(
            lines(&snapshot, &settings),
            elements_are![
                eq("ID: rifle_ak"),
                eq("Order: 7"),
                eq("Count: 3/20"),
                eq("CanBeSold: True"),
                eq("CanDrop: False"),
                eq("HasHandHeldAgent: False"),
                eq("IsBeingDestroyed: False"),
                eq("SoundKey: sfx_metal"),
                eq("DisplayQuality: NONE"),
                eq("Stats: 3"),
            ]
        );
    }

    #[rstest]
    fn developer_stack_count_requires_stackable() {
        let snapshot = ItemSnapshot { stackable: false, ..sample_snapshot() };
        let settings = TooltipSettings { show_developer_id: true, ..disabled_settings() };

        let result = lines(&snapshot, &settings);

        assert_that!(result, not(contains(contains_substring("Count:"))));
    }

    #[rstest]
    #[case::absent(None)]
    #[case::blank(Some("   ".to_string()))]
    fn developer_sound_key_requires_non_blank(#[case] sound_key: Option<String>) {
        let snapshot = ItemSnapshot { sound_key, ..sample_snapshot() };
        let settings = TooltipSettings { show_developer_id: true, ..disabled_settings() };

        let result = lines(&snapshot, &settings);

        assert_that!(result, not(contains(contains_substring("SoundKey:"))));
    }

    #[rstest]
    #[case::zero(0, false)]
    #[case::some(3, true)]
    fn developer_stats_count_only_when_positive(#[case] stats_count: usize, #[case] present: bool) {
        let snapshot = ItemSnapshot { stats_count, ..sample_snapshot() };
        let settings = TooltipSettings { show_developer_id: true, ..disabled_settings() };

        let result = lines(&snapshot, &settings);

        if present {
            assert_that!(result, contains(eq("Stats: 3")));
        } else {
            assert_that!(result, not(contains(contains_substring("Stats:"))));
        }
    }

    #[rstest]
    fn chinese_boolean_tokens_in_developer_block() {
        let store = TranslationStore::builtin();
        let snapshot = ItemSnapshot { can_be_sold: true, ..sample_snapshot() };
        let settings = TooltipSettings { show_developer_id: true, ..disabled_settings() };

        let result = evaluate(&store, &snapshot, &settings, Language::ChineseSimplified);

        assert_that!(result, contains(eq("可出售: 是")));
    }
}
