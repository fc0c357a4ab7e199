//! Pointer-drag arithmetic with boundary clamping

use crate::geometry::{PixelDelta, Rect};
use crate::scale::Scale;

/// Clamp a rectangle's origin so it stays on a `width` x `height` canvas
///
/// Each axis clamps independently to `[0, canvas - size]`. The lower bound
/// is applied last: a zone larger than the canvas pins to the origin rather
/// than escaping through a negative upper bound.
pub fn clamp_origin(rect: &Rect, canvas_width: f64, canvas_height: f64) -> Rect {
    Rect {
        x: rect.x.min(canvas_width - rect.width).max(0.0),
        y: rect.y.min(canvas_height - rect.height).max(0.0),
        ..*rect
    }
}

/// Move a zone by a pointer delta, keeping it on the canvas
///
/// Converts the pixel delta to template units at the current scale, applies
/// it, and clamps per axis. Dragging never rejects a move: the zone snaps to
/// the boundary instead of leaving the canvas.
///
/// Only pointer-driven movement is clamped. Positions typed directly into an
/// inspector are trusted as-is and simply render partially off-canvas until
/// the next drag; callers must not route typed edits through this function.
pub fn drag(
    rect: &Rect,
    delta: PixelDelta,
    scale: &Scale,
    canvas_width: f64,
    canvas_height: f64,
) -> Rect {
    let moved = rect.translated(scale.delta_to_units(delta));
    clamp_origin(&moved, canvas_width, canvas_height)
}
