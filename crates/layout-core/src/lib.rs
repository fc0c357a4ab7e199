//! Layout Core - Canvas geometry and scale transforms
//!
//! This crate provides the coordinate model shared by the interactive badge
//! editor and static preview/export:
//! - Rectangles and deltas in template units (millimeters)
//! - Viewport-fit scale factors with bounded zoom
//! - Unit/pixel conversion for geometry and scalable style values
//! - Pointer-drag arithmetic with boundary clamping
//!
//! # Example
//!
//! ```
//! use layout_core::{drag, PixelDelta, Rect, Scale, Viewport};
//!
//! // Fit a 100x150 mm badge into an 800x600 px viewport at zoom 1.0
//! let scale = Scale::fit(Viewport::new(800.0, 600.0), 100.0, 150.0).unwrap();
//! assert_eq!(scale.factor(), 4.0);
//!
//! // Drag toward the far corner; the zone stops at the canvas edge
//! let zone = Rect::new(90.0, 140.0, 20.0, 20.0);
//! let moved = drag(&zone, PixelDelta::new(50.0, 50.0), &scale, 100.0, 150.0);
//! assert_eq!((moved.x, moved.y), (80.0, 130.0));
//! ```

mod drag;
mod geometry;
mod scale;

pub use drag::{clamp_origin, drag};
pub use geometry::{PixelDelta, PixelRect, Point, Rect, UnitDelta};
pub use scale::{Scale, Viewport, MAX_ZOOM, MIN_ZOOM};

use thiserror::Error;

/// Errors that can occur when constructing layout transforms
///
/// These are structural misuses (a zero-sized viewport, a degenerate canvas),
/// not data errors: template content never produces a `LayoutError`.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Viewport must have positive dimensions, got {0}x{1}")]
    InvalidViewport(f64, f64),

    #[error("Canvas must have positive dimensions, got {0}x{1}")]
    InvalidCanvas(f64, f64),

    #[error("Scale factor must be finite and positive, got {0}")]
    InvalidFactor(f64),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
