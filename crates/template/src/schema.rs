//! Template JSON schema types

use layout_core::Rect;
use serde::{Deserialize, Serialize};

use crate::style::{Color, Style};
use crate::{Result, TemplateError};

/// Root template structure
///
/// A template is a physical canvas in millimeters plus an ordered list of
/// zones. Zone order is paint order: later zones draw over earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Stable identifier assigned by the hosting application
    pub id: String,

    /// Display name shown in the template picker
    pub name: String,

    /// Canvas width in millimeters
    pub width: f64,

    /// Canvas height in millimeters
    pub height: f64,

    /// Canvas background
    #[serde(default)]
    pub background: Background,

    /// Content zones in paint order
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Template {
    /// Look up a zone by id
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Look up a zone by id, mutably
    pub fn zone_mut(&mut self, id: &str) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    /// Check structural validity: positive canvas, unique zone ids
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(TemplateError::InvalidCanvas(self.width, self.height));
        }
        let mut seen = std::collections::HashSet::new();
        for zone in &self.zones {
            if !seen.insert(zone.id.as_str()) {
                return Err(TemplateError::DuplicateZone(zone.id.clone()));
            }
        }
        Ok(())
    }

    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a template from JSON and validate its structure
pub fn parse_template(json: &str) -> Result<Template> {
    let template: Template =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    template.validate()?;
    Ok(template)
}

/// Canvas background (tagged union)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    /// Solid fill
    Solid {
        /// Fill color
        color: Color,
    },

    /// Two-stop linear gradient
    Gradient {
        /// Start color
        from: Color,

        /// End color
        to: Color,

        /// Gradient axis
        #[serde(default)]
        direction: GradientDirection,
    },

    /// Full-bleed image
    Image {
        /// Asset URL or storage key
        asset: String,
    },
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid {
            color: Color::white(),
        }
    }
}

/// Gradient axis for background gradients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Top edge to bottom edge
    #[default]
    ToBottom,

    /// Left edge to right edge
    ToRight,

    /// Top-left corner to bottom-right corner
    ToBottomRight,

    /// Bottom-left corner to top-right corner
    ToTopRight,
}

/// Zone kind, driving content handling and style defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Text, literal or bound to a variable
    Text,

    /// Uploaded image or logo
    Image,

    /// QR code payload, encoded by the host
    Qr,

    /// Barcode payload, encoded by the host
    Barcode,

    /// Decorative fill, no content
    Shape,
}

/// Zone content (tagged union)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Fixed text, may carry `{{token}}` references
    Literal {
        /// Raw text
        text: String,
    },

    /// Dot-separated path into the data context (e.g. `attendee.fullName`)
    Variable {
        /// Lookup path
        path: String,
    },

    /// Reference to an uploaded asset
    Asset {
        /// Asset URL or storage key
        url: String,
    },
}

impl Default for Content {
    fn default() -> Self {
        Content::Literal {
            text: String::new(),
        }
    }
}

/// One rectangle of content on the canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    /// Identifier, unique within the template
    pub id: String,

    /// Zone kind
    pub kind: ZoneKind,

    /// Display label shown in the editor layer list
    #[serde(default)]
    pub name: String,

    /// Position and size in canvas millimeters
    pub position: Rect,

    /// Active content
    #[serde(default)]
    pub content: Content,

    /// Fallback text when a variable path resolves to nothing
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Visual style; unset fields fall back to kind defaults
    #[serde(default)]
    pub style: Style,

    /// Not movable with the pointer
    #[serde(default)]
    pub locked: bool,

    /// Flagged in the editor when it resolves to nothing
    #[serde(default)]
    pub required: bool,
}

impl Zone {
    /// Create a zone with default content and style
    pub fn new(id: &str, kind: ZoneKind, position: Rect) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: String::new(),
            position,
            content: Content::default(),
            placeholder: None,
            style: Style::default(),
            locked: false,
            required: false,
        }
    }

    /// Builder-style content setter
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Builder-style name setter
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Builder-style style setter
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Builder-style placeholder setter
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Builder-style locked flag
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Builder-style required flag
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json() -> &'static str {
        r##"{
            "id": "badge-001",
            "name": "Speaker Badge",
            "width": 105.0,
            "height": 148.0,
            "background": { "type": "solid", "color": "#ffffff" },
            "zones": [
                {
                    "id": "event-name",
                    "kind": "text",
                    "name": "Event name",
                    "position": { "x": 10.0, "y": 12.0, "width": 85.0, "height": 14.0 },
                    "content": { "type": "variable", "path": "event.name" },
                    "placeholder": "Event"
                },
                {
                    "id": "qr-checkin",
                    "kind": "qr",
                    "position": { "x": 35.0, "y": 95.0, "width": 35.0, "height": 35.0 },
                    "content": { "type": "variable", "path": "security.code" },
                    "locked": true
                }
            ]
        }"##
    }

    #[test]
    fn parse_sample_template() {
        let template = parse_template(sample_json()).unwrap();
        assert_eq!(template.id, "badge-001");
        assert_eq!(template.width, 105.0);
        assert_eq!(template.zones.len(), 2);
        assert_eq!(template.zones[0].kind, ZoneKind::Text);
        assert_eq!(
            template.zones[0].content,
            Content::Variable {
                path: "event.name".to_string()
            }
        );
        assert_eq!(template.zones[0].placeholder.as_deref(), Some("Event"));
        assert!(template.zones[1].locked);
    }

    #[test]
    fn zone_defaults_fill_in() {
        let template = parse_template(sample_json()).unwrap();
        let qr = template.zone("qr-checkin").unwrap();
        assert_eq!(qr.name, "");
        assert_eq!(qr.style, Style::default());
        assert!(!qr.required);
    }

    #[test]
    fn roundtrip_preserves_structure() {
        let template = parse_template(sample_json()).unwrap();
        let json = template.to_json().unwrap();
        let reparsed = parse_template(&json).unwrap();
        assert_eq!(template, reparsed);
    }

    #[test]
    fn duplicate_zone_ids_rejected() {
        let mut template = parse_template(sample_json()).unwrap();
        let mut copy = template.zones[0].clone();
        copy.position = Rect::new(0.0, 0.0, 10.0, 10.0);
        template.zones.push(copy);
        assert!(matches!(
            template.validate(),
            Err(TemplateError::DuplicateZone(id)) if id == "event-name"
        ));
    }

    #[test]
    fn zero_canvas_rejected() {
        let json = r#"{ "id": "t", "name": "t", "width": 0.0, "height": 148.0 }"#;
        assert!(matches!(
            parse_template(json),
            Err(TemplateError::InvalidCanvas(_, _))
        ));
    }

    #[test]
    fn unknown_background_type_is_parse_error() {
        let json = r#"{
            "id": "t", "name": "t", "width": 10.0, "height": 10.0,
            "background": { "type": "plaid" }
        }"#;
        assert!(matches!(
            parse_template(json),
            Err(TemplateError::ParseError(_))
        ));
    }

    #[test]
    fn malformed_color_is_parse_error() {
        let json = r##"{
            "id": "t", "name": "t", "width": 10.0, "height": 10.0,
            "background": { "type": "solid", "color": "#€€" }
        }"##;
        assert!(matches!(
            parse_template(json),
            Err(TemplateError::ParseError(_))
        ));
    }
}
