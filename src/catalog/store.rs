//! Translation store: language-aware template resolution.

use std::collections::HashMap;
use std::fmt::Display;

use serde_json::Value;
use thiserror::Error;

use super::{
    builtin,
    keys,
};
use crate::types::Language;

/// Catalog assembly errors.
///
/// These indicate a defective catalog, not a runtime condition; they are
/// surfaced by [`TranslationStore::verify_fallback_coverage`] so tests catch
/// them before any composition runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The English table is missing entirely.
    #[error("fallback language table (English) is missing")]
    MissingFallbackTable,

    /// One or more message keys have no English template.
    #[error("message keys missing from the fallback table: {}", .0.join(", "))]
    MissingFallbackKeys(Vec<String>),
}

/// Immutable language → key → template mapping.
///
/// Built once at startup and read-only afterwards, so a shared reference can
/// be used from any number of threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStore {
    /// Per-language template tables. Non-English tables may be partial;
    /// English must cover [`keys::ALL`].
    tables: HashMap<Language, HashMap<String, String>>,
}

impl TranslationStore {
    /// Creates a store holding only the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self { tables: builtin::tables() }
    }

    /// Starts a builder seeded with the built-in tables, for overlaying
    /// user-supplied catalog JSON before the store is frozen.
    #[must_use]
    pub fn builder() -> TranslationStoreBuilder {
        TranslationStoreBuilder { tables: builtin::tables() }
    }

    /// Resolves a message key to its template.
    ///
    /// Lookup order: the requested language table, then the English
    /// fallback table. A key absent from both is a catalog defect (the
    /// composer only uses keys from [`keys::ALL`], all of which the built-in
    /// English table carries); in that case the key itself is returned so
    /// composition stays total.
    #[must_use]
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(template) = self.tables.get(&language).and_then(|table| table.get(key)) {
            return template;
        }

        if let Some(template) = self.tables.get(&Language::English).and_then(|table| table.get(key))
        {
            return template;
        }

        debug_assert!(false, "message key '{key}' missing from the fallback table");
        tracing::warn!(key, "message key missing from the fallback table");
        key
    }

    /// Resolves a template and substitutes positional `{0}`, `{1}`, …
    /// placeholders left to right.
    ///
    /// Supplying fewer arguments than the template has placeholders is a
    /// caller error; excess placeholders are left verbatim rather than
    /// panicking.
    #[must_use]
    pub fn format(&self, language: Language, key: &str, args: &[&dyn Display]) -> String {
        substitute(self.resolve(language, key), args)
    }

    /// Returns the language-specific boolean token.
    ///
    /// The Chinese group shares 是/否; every other language uses the generic
    /// True/False pair. Boolean tokens are not templates, so this does not
    /// go through the key tables.
    #[must_use]
    pub const fn format_bool(language: Language, value: bool) -> &'static str {
        if language.is_chinese() {
            if value { "是" } else { "否" }
        } else if value {
            "True"
        } else {
            "False"
        }
    }

    /// Checks that every composer key has an English template.
    pub fn verify_fallback_coverage(&self) -> Result<(), CatalogError> {
        let Some(fallback) = self.tables.get(&Language::English) else {
            return Err(CatalogError::MissingFallbackTable);
        };

        let missing: Vec<String> = keys::ALL
            .iter()
            .filter(|key| !fallback.contains_key(**key))
            .map(|key| (*key).to_string())
            .collect();

        if missing.is_empty() { Ok(()) } else { Err(CatalogError::MissingFallbackKeys(missing)) }
    }
}

/// Builder that overlays catalog JSON onto the built-in tables.
#[derive(Debug, Clone)]
pub struct TranslationStoreBuilder {
    /// Tables under construction.
    tables: HashMap<Language, HashMap<String, String>>,
}

impl TranslationStoreBuilder {
    /// Merges a JSON catalog into one language table.
    ///
    /// Nested objects are flattened into dot-separated keys; string leaves
    /// become templates. Existing entries with the same key are replaced.
    #[must_use]
    pub fn merge_json(mut self, language: Language, json: &Value) -> Self {
        let flattened = flatten_json(json, ".", None);
        let table = self.tables.entry(language).or_default();
        for (key, template) in flattened {
            table.insert(key, template);
        }
        self
    }

    /// Freezes the builder into an immutable store.
    #[must_use]
    pub fn build(self) -> TranslationStore {
        TranslationStore { tables: self.tables }
    }
}

/// Substitutes positional placeholders into a template.
fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut result = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{index}}}"), &arg.to_string());
    }
    result
}

/// Flattens a nested JSON object into a dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use item_info_engine::catalog::flatten_json;
///
/// let json = json!({ "labels": { "quality": "Quality: {0}" } });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("labels.quality"), Some(&"Quality: {0}".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                tracing::warn!(key, "ignoring non-string catalog value");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn resolve_prefers_the_requested_language() {
        let store = TranslationStore::builtin();

        assert_that!(store.resolve(Language::Japanese, keys::NO_TAGS), eq("タグなし"));
    }

    #[rstest]
    fn resolve_falls_back_to_english_for_partial_tables() {
        let store = TranslationStore::builtin();

        // Developer labels are only localized for the Chinese group.
        assert_that!(
            store.resolve(Language::Japanese, keys::ORDER_LABEL),
            eq(store.resolve(Language::English, keys::ORDER_LABEL))
        );
    }

    #[rstest]
    fn resolve_never_fails_for_any_supported_language_and_key() {
        let store = TranslationStore::builtin();

        for language in Language::all() {
            for key in keys::ALL {
                assert_that!(store.resolve(*language, key).is_empty(), eq(false));
            }
        }
    }

    #[rstest]
    fn format_substitutes_positional_args() {
        let store = TranslationStore::builtin();

        let line = store.format(Language::English, keys::DURABILITY_FORMAT, &[&5, &10]);

        assert_that!(line.as_str(), eq("Durability: 5/10"));
    }

    #[rstest]
    fn format_leaves_excess_placeholders_verbatim() {
        let store = TranslationStore::builtin();

        let line = store.format(Language::English, keys::DURABILITY_FORMAT, &[&5]);

        assert_that!(line.as_str(), eq("Durability: 5/{1}"));
    }

    #[rstest]
    #[case::simplified_true(Language::ChineseSimplified, true, "是")]
    #[case::traditional_false(Language::ChineseTraditional, false, "否")]
    #[case::generic_true(Language::Chinese, true, "是")]
    #[case::english_true(Language::English, true, "True")]
    #[case::korean_false(Language::Korean, false, "False")]
    fn format_bool_uses_the_chinese_group_tokens(
        #[case] language: Language,
        #[case] value: bool,
        #[case] expected: &str,
    ) {
        assert_that!(TranslationStore::format_bool(language, value), eq(expected));
    }

    #[rstest]
    fn builtin_store_passes_fallback_coverage() {
        let store = TranslationStore::builtin();

        assert_that!(store.verify_fallback_coverage(), ok(anything()));
    }

    #[rstest]
    fn merge_json_overlays_flattened_keys() {
        let overlay = json!({ "QualityLabel": "Grade: {0}", "extra": { "note": "hi" } });
        let store = TranslationStore::builder().merge_json(Language::English, &overlay).build();

        assert_that!(store.resolve(Language::English, keys::QUALITY_LABEL), eq("Grade: {0}"));
        assert_that!(store.resolve(Language::English, "extra.note"), eq("hi"));
        // Untouched keys survive the overlay.
        assert_that!(store.resolve(Language::English, keys::NO_TAGS), eq("No tags"));
    }

    #[rstest]
    fn merge_json_ignores_non_string_values() {
        let overlay = json!({ "QualityLabel": 42 });
        let store = TranslationStore::builder().merge_json(Language::English, &overlay).build();

        assert_that!(store.resolve(Language::English, keys::QUALITY_LABEL), eq("Quality: {0}"));
    }
}
