//! Viewport-fit scale factors and unit/pixel conversion

use crate::geometry::{PixelDelta, PixelRect, Rect, UnitDelta};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Lowest zoom the interactive editor offers
pub const MIN_ZOOM: f64 = 0.5;

/// Highest zoom the interactive editor offers
pub const MAX_ZOOM: f64 = 2.0;

/// Pixel budget the canvas has to fit into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Available width in pixels
    pub width: f64,
    /// Available height in pixels
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Conversion factor between template units and viewport pixels
///
/// One `Scale` value is shared by everything rendered in a pass, so geometry
/// and scalable style values (font size, border radius) stay proportional.
/// The factor is always finite and positive; constructors reject anything
/// else so downstream arithmetic never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    factor: f64,
}

impl Scale {
    /// Create a scale from a raw factor
    ///
    /// # Arguments
    /// * `factor` - Pixels per template unit; must be finite and > 0
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LayoutError::InvalidFactor(factor));
        }
        Ok(Self { factor })
    }

    /// The 1:1 scale: one pixel per template unit
    pub fn identity() -> Self {
        Self { factor: 1.0 }
    }

    /// Fit a canvas into a viewport at zoom 1.0
    ///
    /// The factor is `min(viewport.width / canvas_width, viewport.height /
    /// canvas_height)`: the whole canvas is visible and aspect ratio is
    /// preserved, the same fit-box rule used for images placed in a target
    /// box.
    pub fn fit(viewport: Viewport, canvas_width: f64, canvas_height: f64) -> Result<Self> {
        Self::fit_zoomed(viewport, canvas_width, canvas_height, 1.0)
    }

    /// Fit a canvas into a viewport at an explicit zoom
    ///
    /// Zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]` before it multiplies the fit
    /// factor, so a wild zoom value degrades to the nearest bound instead of
    /// producing an unusable factor.
    pub fn fit_zoomed(
        viewport: Viewport,
        canvas_width: f64,
        canvas_height: f64,
        zoom: f64,
    ) -> Result<Self> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(LayoutError::InvalidViewport(viewport.width, viewport.height));
        }
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(LayoutError::InvalidCanvas(canvas_width, canvas_height));
        }

        let width_ratio = viewport.width / canvas_width;
        let height_ratio = viewport.height / canvas_height;
        let zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };

        Self::new(width_ratio.min(height_ratio) * zoom)
    }

    /// Pixels per template unit
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Convert a length in template units to pixels
    pub fn to_pixels(&self, units: f64) -> f64 {
        units * self.factor
    }

    /// Convert a length in pixels back to template units
    pub fn to_units(&self, pixels: f64) -> f64 {
        pixels / self.factor
    }

    /// Convert a unit-space rectangle to its on-screen pixel box
    pub fn rect_to_pixels(&self, rect: &Rect) -> PixelRect {
        PixelRect {
            x: self.to_pixels(rect.x),
            y: self.to_pixels(rect.y),
            width: self.to_pixels(rect.width),
            height: self.to_pixels(rect.height),
        }
    }

    /// Convert a pointer movement in pixels to a unit-space movement
    pub fn delta_to_units(&self, delta: PixelDelta) -> UnitDelta {
        UnitDelta {
            dx: self.to_units(delta.dx),
            dy: self.to_units(delta.dy),
        }
    }
}
