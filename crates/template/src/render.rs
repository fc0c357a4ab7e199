//! Zone rendering
//!
//! Rendering turns schema zones into paint-ready [`ResolvedZone`]s for one
//! data context at one scale. The output is transient: it is recomputed
//! whenever the template, context, scale or mode changes, and is never
//! persisted back into the template.

use layout_core::{PixelRect, Scale};
use serde::{Deserialize, Serialize};

use crate::context::DataContext;
use crate::resolver::{interpolate, resolve, resolve_with_placeholder};
use crate::schema::{Content, Template, Zone, ZoneKind};
use crate::style::{resolve_style, ResolvedStyle};

/// Rendering destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Interactive editor; output carries interaction flags
    Edit,

    /// Static preview or export; no interaction state
    Preview,
}

/// Zone content after resolution (tagged union)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedContent {
    /// Final display text
    Text {
        /// Resolved text
        text: String,
    },

    /// Asset reference for the paint backend
    Asset {
        /// Asset URL or storage key
        url: String,
    },

    /// Payload for the host's symbol encoder
    Symbol {
        /// Raw payload string
        data: String,
    },

    /// Nothing usable resolved; paint the placeholder box
    Placeholder,

    /// The zone kind carries no content
    Empty,
}

/// Interaction flags carried by edit-mode output
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Interaction {
    /// Zone is the current selection
    pub selected: bool,

    /// Pointer is over the zone
    pub hovered: bool,
}

/// A zone ready to paint: pixel geometry, resolved content, concrete style
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedZone {
    /// Id of the source zone
    #[serde(rename = "zoneId")]
    pub zone_id: String,

    /// Kind of the source zone
    pub kind: ZoneKind,

    /// On-screen box at the render scale
    #[serde(rename = "pixelBox")]
    pub pixel_box: PixelRect,

    /// Resolved content
    pub content: ResolvedContent,

    /// Concrete style at the render scale
    pub style: ResolvedStyle,

    /// Present in edit mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

/// Render one zone against a data context at a given scale
///
/// Pure: the output depends only on the arguments. Content that fails to
/// resolve degrades to placeholder output; it never errors.
pub fn render(zone: &Zone, ctx: &DataContext, scale: &Scale, mode: RenderMode) -> ResolvedZone {
    ResolvedZone {
        zone_id: zone.id.clone(),
        kind: zone.kind,
        pixel_box: scale.rect_to_pixels(&zone.position),
        content: resolve_content(zone, ctx, true),
        style: resolve_style(zone.kind, &zone.style, scale),
        interaction: match mode {
            RenderMode::Edit => Some(Interaction::default()),
            RenderMode::Preview => None,
        },
    }
}

/// Render every zone of a template in paint order
///
/// Later entries paint over earlier ones; no z-index sorting happens here.
pub fn render_template(
    template: &Template,
    ctx: &DataContext,
    scale: &Scale,
    mode: RenderMode,
) -> Vec<ResolvedZone> {
    template
        .zones
        .iter()
        .map(|zone| render(zone, ctx, scale, mode))
        .collect()
}

/// Ids of required zones that resolve to nothing for this context
///
/// Checks the raw resolution, ignoring placeholder fallbacks: a required
/// zone showing its placeholder still counts as unresolved.
pub fn unresolved_required<'a>(template: &'a Template, ctx: &DataContext) -> Vec<&'a str> {
    template
        .zones
        .iter()
        .filter(|zone| zone.required && !has_content(zone, ctx))
        .map(|zone| zone.id.as_str())
        .collect()
}

fn has_content(zone: &Zone, ctx: &DataContext) -> bool {
    match resolve_content(zone, ctx, false) {
        ResolvedContent::Text { text } => !text.is_empty(),
        ResolvedContent::Asset { .. } | ResolvedContent::Symbol { .. } => true,
        ResolvedContent::Placeholder => false,
        ResolvedContent::Empty => true,
    }
}

fn resolve_content(zone: &Zone, ctx: &DataContext, use_placeholder: bool) -> ResolvedContent {
    match zone.kind {
        ZoneKind::Text => ResolvedContent::Text {
            text: resolve_text(zone, ctx, use_placeholder),
        },
        ZoneKind::Image => {
            let url = match &zone.content {
                Content::Asset { url } => url.clone(),
                Content::Variable { path } => resolve(path, ctx),
                Content::Literal { text } => text.clone(),
            };
            if url.is_empty() {
                ResolvedContent::Placeholder
            } else {
                ResolvedContent::Asset { url }
            }
        }
        ZoneKind::Qr | ZoneKind::Barcode => {
            let data = match &zone.content {
                Content::Literal { text } => interpolate(text, ctx),
                Content::Variable { path } => resolve(path, ctx),
                Content::Asset { url } => url.clone(),
            };
            if data.is_empty() {
                ResolvedContent::Placeholder
            } else {
                ResolvedContent::Symbol { data }
            }
        }
        ZoneKind::Shape => ResolvedContent::Empty,
    }
}

fn resolve_text(zone: &Zone, ctx: &DataContext, use_placeholder: bool) -> String {
    match &zone.content {
        Content::Literal { text } => interpolate(text, ctx),
        Content::Variable { path } => {
            let placeholder = if use_placeholder {
                zone.placeholder.as_deref()
            } else {
                None
            };
            resolve_with_placeholder(path, ctx, placeholder)
        }
        Content::Asset { .. } => String::new(),
    }
}
