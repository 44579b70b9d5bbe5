//! Display-list primitives emitted by the frame builder.

use kurbo::{Affine, Point, Rect};
use peniko::Color;

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    /// Centered on the given position.
    Center,
    /// Ends at the given position.
    Right,
}

/// One drawing command. Coordinates are interpreted in the space of the
/// layer the op belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f64,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f64,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Text {
        position: Point,
        content: String,
        color: Color,
        size: f64,
        bold: bool,
        align: TextAlign,
    },
}

/// A complete frame, ready for a backend to rasterize.
///
/// `canvas` ops are in canvas coordinates and drawn under `transform`;
/// `overlay` ops are in screen pixels and drawn last, untransformed.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub transform: Affine,
    pub canvas: Vec<DrawOp>,
    pub overlay: Vec<DrawOp>,
}

impl Frame {
    pub fn op_count(&self) -> usize {
        self.canvas.len() + self.overlay.len()
    }
}
