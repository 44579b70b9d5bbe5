//! View transform for the design canvas: pan, zoom, and the mapping between
//! screen pixels and canvas coordinates.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.25;
/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f64 = 4.0;
/// Zoom increment for stepped zoom in/out.
pub const ZOOM_STEP: f64 = 0.25;
/// Fixed width of the ruler strips, when shown.
pub const RULER_INSET: i32 = 20;

/// An integer point in canvas (unscaled, unpanned) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The canvas's transient view state: zoom factor, pan offset, ruler flag.
///
/// Component bounds live in canvas space; pointer events and rendering live in
/// screen space. `CanvasView` is the bidirectional bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasView {
    /// Current zoom factor, always within `[MIN_ZOOM, MAX_ZOOM]`.
    zoom: f64,
    /// Screen-space pan translation.
    pub offset_x: i32,
    pub offset_y: i32,
    /// Whether ruler strips are shown; they inset the drawable area by
    /// `RULER_INSET` pixels on the left and top.
    pub show_rulers: bool,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0,
            offset_y: 0,
            show_rulers: false,
        }
    }
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom as a whole percentage, for the status display poll.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Set an arbitrary zoom factor, clamped to the valid range. Used by
    /// fit-to-window style callers; not quantized to the step.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Step the zoom in by one increment.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom out by one increment.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Reset to 100% zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0;
        self.offset_y = 0;
    }

    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    fn ruler_inset(&self) -> i32 {
        if self.show_rulers { RULER_INSET } else { 0 }
    }

    /// Convert a screen pixel position to canvas coordinates, truncating
    /// toward zero like the integer canvas space demands.
    pub fn screen_to_canvas(&self, screen: Point) -> CanvasPoint {
        let inset = f64::from(self.ruler_inset());
        CanvasPoint::new(
            ((screen.x - f64::from(self.offset_x) - inset) / self.zoom) as i32,
            ((screen.y - f64::from(self.offset_y) - inset) / self.zoom) as i32,
        )
    }

    /// Convert a canvas position to screen pixels.
    pub fn canvas_to_screen(&self, canvas: CanvasPoint) -> Point {
        let inset = f64::from(self.ruler_inset());
        Point::new(
            (f64::from(canvas.x) * self.zoom + f64::from(self.offset_x) + inset).trunc(),
            (f64::from(canvas.y) * self.zoom + f64::from(self.offset_y) + inset).trunc(),
        )
    }

    /// Step the zoom toward a cursor position: the canvas point under the
    /// cursor before the step stays under it afterwards.
    pub fn zoom_at(&mut self, cursor: Point, zoom_in: bool) {
        let before = self.zoom;
        let anchor = self.screen_to_canvas(cursor);
        if zoom_in {
            self.zoom_in();
        } else {
            self.zoom_out();
        }
        if (self.zoom - before).abs() < f64::EPSILON {
            return;
        }
        self.offset_x = (cursor.x - f64::from(anchor.x) * self.zoom) as i32;
        self.offset_y = (cursor.y - f64::from(anchor.y) * self.zoom) as i32;
    }

    /// The pan+zoom affine applied to canvas-space draw commands.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(
            f64::from(self.offset_x),
            f64::from(self.offset_y),
        )) * Affine::scale(self.zoom)
    }
}
