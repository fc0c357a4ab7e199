//! Zone styling: sparse per-zone styles resolved against kind defaults

use std::fmt;

use layout_core::Scale;
use serde::{Deserialize, Serialize};

use crate::schema::ZoneKind;

/// RGB color, persisted as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0 - 255)
    pub r: u8,
    /// Green component (0 - 255)
    pub g: u8,
    /// Blue component (0 - 255)
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        // Byte slicing below assumes single-byte chars
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#rrggbb` literal
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Light gray color
    pub fn light_gray() -> Self {
        Self::rgb(224, 224, 224)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color literal: {raw}")))
    }
}

/// Font weight for text zones
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Normal,

    /// Semi-bold weight
    Semibold,

    /// Bold weight
    Bold,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned
    #[default]
    Left,

    /// Centered
    Center,

    /// Right-aligned
    Right,
}

/// Per-zone style overrides
///
/// Every field is optional; unset fields fall back to the defaults for the
/// zone's kind when the zone is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Style {
    /// Background fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// Text or stroke color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,

    /// Font size in canvas millimeters
    #[serde(rename = "fontSize")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font weight
    #[serde(rename = "fontWeight")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Corner radius in canvas millimeters
    #[serde(rename = "borderRadius")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,

    /// Opacity, 0.0 (transparent) to 1.0 (opaque)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    /// Clockwise rotation in degrees around the zone center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Fully resolved style, ready to paint at one scale
///
/// Lengths are in pixels at the render scale; rotation and opacity are
/// scale-independent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedStyle {
    /// Background fill, `None` for transparent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// Text or stroke color
    pub foreground: Color,

    /// Font size in pixels
    #[serde(rename = "fontSize")]
    pub font_size: f64,

    /// Font weight
    #[serde(rename = "fontWeight")]
    pub font_weight: FontWeight,

    /// Horizontal alignment
    pub align: Align,

    /// Corner radius in pixels
    #[serde(rename = "borderRadius")]
    pub border_radius: f64,

    /// Opacity, clamped to 0.0 - 1.0
    pub opacity: f64,

    /// Clockwise rotation in degrees
    pub rotation: f64,
}

struct KindDefaults {
    background: Option<Color>,
    foreground: Color,
    font_size: f64,
    font_weight: FontWeight,
    align: Align,
}

fn kind_defaults(kind: ZoneKind) -> KindDefaults {
    match kind {
        ZoneKind::Text => KindDefaults {
            background: None,
            foreground: Color::black(),
            font_size: 4.0,
            font_weight: FontWeight::Normal,
            align: Align::Left,
        },
        ZoneKind::Image => KindDefaults {
            background: None,
            foreground: Color::black(),
            font_size: 4.0,
            font_weight: FontWeight::Normal,
            align: Align::Center,
        },
        // Symbol zones keep a white quiet zone behind the modules
        ZoneKind::Qr | ZoneKind::Barcode => KindDefaults {
            background: Some(Color::white()),
            foreground: Color::black(),
            font_size: 4.0,
            font_weight: FontWeight::Normal,
            align: Align::Center,
        },
        ZoneKind::Shape => KindDefaults {
            background: Some(Color::light_gray()),
            foreground: Color::light_gray(),
            font_size: 4.0,
            font_weight: FontWeight::Normal,
            align: Align::Center,
        },
    }
}

/// Resolve a sparse style against its kind defaults at a render scale
pub fn resolve_style(kind: ZoneKind, style: &Style, scale: &Scale) -> ResolvedStyle {
    let defaults = kind_defaults(kind);
    ResolvedStyle {
        background: style.background.or(defaults.background),
        foreground: style.foreground.unwrap_or(defaults.foreground),
        font_size: scale.to_pixels(style.font_size.unwrap_or(defaults.font_size)),
        font_weight: style.font_weight.unwrap_or(defaults.font_weight),
        align: style.align.unwrap_or(defaults.align),
        border_radius: scale.to_pixels(style.border_radius.unwrap_or(0.0)),
        opacity: style.opacity.unwrap_or(1.0).clamp(0.0, 1.0),
        rotation: style.rotation.unwrap_or(0.0),
    }
}
