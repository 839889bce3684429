//! Core types used throughout the project.

use serde::{
    Deserialize,
    Serialize,
};

/// Supported display languages.
///
/// The set is closed: the catalog ships a table for every variant, and
/// [`Language::English`] is the fallback guaranteed to carry every message
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Language {
    /// Chinese without a script qualifier (resolves like Simplified).
    Chinese,
    /// Simplified Chinese
    ChineseSimplified,
    /// Traditional Chinese
    ChineseTraditional,
    /// English (fallback)
    #[default]
    English,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
    /// French
    French,
    /// Russian
    Russian,
    /// German
    German,
    /// Spanish
    Spanish,
}

impl Language {
    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Chinese,
            Self::ChineseSimplified,
            Self::ChineseTraditional,
            Self::English,
            Self::Japanese,
            Self::Korean,
            Self::French,
            Self::Russian,
            Self::German,
            Self::Spanish,
        ]
    }

    /// Returns the display name of the language.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chinese => "中文",
            Self::ChineseSimplified => "简体中文",
            Self::ChineseTraditional => "繁體中文",
            Self::English => "English",
            Self::Japanese => "日本語",
            Self::Korean => "한국어",
            Self::French => "Français",
            Self::Russian => "Русский",
            Self::German => "Deutsch",
            Self::Spanish => "Español",
        }
    }

    /// Whether the language belongs to the Chinese group.
    ///
    /// Boolean tokens (是/否) are shared across all three Chinese variants,
    /// so this is a membership test rather than anything structural.
    #[must_use]
    pub const fn is_chinese(self) -> bool {
        matches!(self, Self::Chinese | Self::ChineseSimplified | Self::ChineseTraditional)
    }

    /// Maps a loose language tag (e.g. `"zh-CN"`, `"ja"`) to a supported
    /// language.
    ///
    /// Tags are matched case-insensitively with `-`/`_` treated the same.
    /// Unknown tags return `None`; callers are expected to fall back to
    /// [`Language::English`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "zh" => Some(Self::Chinese),
            "zh_cn" | "zh_hans" | "zh_sg" => Some(Self::ChineseSimplified),
            "zh_tw" | "zh_hant" | "zh_hk" | "zh_mo" => Some(Self::ChineseTraditional),
            "en" | "en_us" | "en_gb" => Some(Self::English),
            "ja" | "ja_jp" => Some(Self::Japanese),
            "ko" | "ko_kr" => Some(Self::Korean),
            "fr" | "fr_fr" => Some(Self::French),
            "ru" | "ru_ru" => Some(Self::Russian),
            "de" | "de_de" => Some(Self::German),
            "es" | "es_es" => Some(Self::Spanish),
            _ => None,
        }
    }
}

/// An RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Parses an HTML-style hex color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`; the leading `#` is
    /// optional. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use item_info_engine::types::Color;
    ///
    /// let white = Color::parse_hex("#FFFFFF");
    /// assert_eq!(white, Some(Color { r: 255, g: 255, b: 255, a: 255 }));
    /// assert_eq!(Color::parse_hex("not-a-color"), None);
    /// ```
    #[must_use]
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let mut nibbles = hex.chars();
                let r = expand_nibble(nibbles.next()?)?;
                let g = expand_nibble(nibbles.next()?)?;
                let b = expand_nibble(nibbles.next()?)?;
                Some(Self { r, g, b, a: 0xFF })
            }
            6 => Some(Self {
                r: byte_at(hex, 0)?,
                g: byte_at(hex, 2)?,
                b: byte_at(hex, 4)?,
                a: 0xFF,
            }),
            8 => Some(Self {
                r: byte_at(hex, 0)?,
                g: byte_at(hex, 2)?,
                b: byte_at(hex, 4)?,
                a: byte_at(hex, 6)?,
            }),
            _ => None,
        }
    }
}

/// Parses two hex digits starting at `start` as one byte.
fn byte_at(hex: &str, start: usize) -> Option<u8> {
    u8::from_str_radix(hex.get(start..start + 2)?, 16).ok()
}

/// Expands a single hex digit to its doubled byte (`F` → `FF`).
fn expand_nibble(digit: char) -> Option<u8> {
    let value = digit.to_digit(16)?;
    u8::try_from(value * 17).ok()
}
