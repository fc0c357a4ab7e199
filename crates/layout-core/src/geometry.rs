//! Geometry primitives in template units and viewport pixels

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in template units (millimeters)
///
/// This is the stored form of a zone's position: origin at the canvas
/// top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in template units
    pub x: f64,
    /// Top edge in template units
    pub y: f64,
    /// Width in template units
    pub width: f64,
    /// Height in template units
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from origin and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// This rectangle moved by a unit-space delta
    pub fn translated(&self, delta: UnitDelta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
            ..*self
        }
    }

    /// Whether a unit-space point falls inside this rectangle
    ///
    /// Edges count as inside, which is what hit-testing in the editor wants:
    /// a zone flush against the canvas border must still be selectable.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Whether this rectangle lies entirely within a `width` x `height` canvas
    pub fn within_canvas(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// A point in template units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A movement in template units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDelta {
    pub dx: f64,
    pub dy: f64,
}

impl UnitDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A pointer movement in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PixelDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Axis-aligned rectangle in viewport pixels
///
/// Produced by scaling a unit-space [`Rect`]; never stored, recomputed on
/// every scale change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
