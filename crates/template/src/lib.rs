//! Template Engine - badge and ticket document templates
//!
//! This crate provides:
//! - Template JSON schema types (canvas, zones, styles, backgrounds)
//! - Data context assembly and `{{token}}` variable resolution
//! - Zone rendering into paint-ready resolved zones
//! - An editing session with mutations, selection and snapshot undo/redo
//! - Preset templates for the common badge and ticket formats
//!
//! # Example
//!
//! ```ignore
//! use layout_core::{Scale, Viewport};
//! use template::{parse_template, render_template, DataContext, RenderMode};
//!
//! let template = parse_template(template_json)?;
//! let ctx = DataContext::from_value(serde_json::from_str(data_json)?);
//! let scale = Scale::fit(Viewport::new(840.0, 1184.0), template.width, template.height)?;
//! let zones = render_template(&template, &ctx, &scale, RenderMode::Preview);
//! ```

pub mod context;
pub mod edit;
pub mod presets;
mod render;
mod resolver;
mod schema;
mod style;

pub use context::{DataContext, DataContextBuilder};
pub use edit::{EditorSession, Mutation};
pub use presets::Preset;
pub use render::{
    render, render_template, unresolved_required, Interaction, RenderMode, ResolvedContent,
    ResolvedZone,
};
pub use resolver::{interpolate, resolve, resolve_path, resolve_with_placeholder, value_to_display};
pub use schema::*;
pub use style::*;

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Canvas dimensions must be positive, got {0}x{1}")]
    InvalidCanvas(f64, f64),

    #[error("Duplicate zone id: {0}")]
    DuplicateZone(String),

    #[error("Unknown zone id: {0}")]
    UnknownZone(String),

    #[error("Zone is locked: {0}")]
    ZoneLocked(String),

    #[error("Layout error: {0}")]
    LayoutError(#[from] layout_core::LayoutError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
