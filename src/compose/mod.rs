//! Tooltip line composition.
//!
//! [`compose`] is a pure function of (snapshot, settings, language): it
//! evaluates the fixed, ordered rule list and assembles the emitted lines
//! into a [`ComposedOutput`] for the host renderer. No state is kept between
//! calls; every hover event recomposes from scratch.

mod format;
mod rules;

use crate::catalog::TranslationStore;
use crate::config::TooltipSettings;
use crate::snapshot::ItemSnapshot;
use crate::types::{
    Color,
    Language,
};

/// The composed tooltip, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedOutput {
    /// Newline-joined display lines, no trailing separator.
    pub text: String,
    /// Font size taken from the settings.
    pub font_size: f32,
    /// Parsed display color; `None` means the settings color string was
    /// malformed and the previously active color should be kept.
    pub color: Option<Color>,
}

impl ComposedOutput {
    /// Iterates over the individual display lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Composes the tooltip text for one item.
///
/// Evaluates the ordered field rules against the snapshot and settings and
/// resolves every emitted line through the translation store. Always total:
/// recoverable display faults (malformed color, missing max durability)
/// fall back locally and never abort composition.
#[must_use]
pub fn compose(
    store: &TranslationStore,
    snapshot: &ItemSnapshot,
    settings: &TooltipSettings,
    language: Language,
) -> ComposedOutput {
    let lines = rules::evaluate(store, snapshot, settings, language);

    let color = Color::parse_hex(&settings.text_color);
    if color.is_none() {
        tracing::warn!(
            color = %settings.text_color,
            "failed to parse text color, keeping the previous color"
        );
    }

    ComposedOutput { text: lines.join("\n"), font_size: settings.font_size, color }
}
