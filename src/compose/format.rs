//! Display formatting helpers for the field rules.

/// Clamps a quality value to `0..=9` and suffixes a star.
pub(super) fn quality_stars(quality: i32) -> String {
    format!("{}★", quality.clamp(0, 9))
}

/// Joins tag strings with `", "`, dropping blank entries.
///
/// Returns `None` when the collection is absent or nothing survives the
/// blank filter, so the caller can substitute the localized "no tags"
/// message.
pub(super) fn join_tags(tags: Option<&[String]>) -> Option<String> {
    let joined = tags?
        .iter()
        .map(String::as_str)
        .filter(|tag| !tag.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() { None } else { Some(joined) }
}

/// Formats a number for display, trimming a trailing `.0`.
///
/// `50.0` → `"50"`, `12.5` → `"12.5"`.
pub(super) fn display_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON { format!("{value:.0}") } else { value.to_string() }
}

/// Rounds to zero decimal places and groups thousands with commas.
///
/// `12345.4` → `"12,345"`.
pub(super) fn group_thousands(value: f32) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 { format!("-{grouped}") } else { grouped }
}
