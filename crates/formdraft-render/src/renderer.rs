//! Frame building: turns canvas state into a backend-agnostic display list.

use crate::scene::{DrawOp, Frame, TextAlign};
use formdraft_core::canvas::{DesignCanvas, InteractionMode};
use formdraft_core::component::{PlacedComponent, WidgetKind};
use formdraft_core::handles::{HANDLE_SIZE, ResizeHandle};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Fixed spacing of the background grid, in canvas units. Independent of the
/// snapping grid size, which only affects manipulation.
pub const VISUAL_GRID_SPACING: f64 = 10.0;

const GRID_COLOR: Color = Color::from_rgba8(192, 192, 192, 255);
const BORDER_COLOR: Color = Color::from_rgba8(0, 0, 0, 255);
const DISABLED_TEXT: Color = Color::from_rgba8(128, 128, 128, 255);
const DISABLED_OVERLAY: Color = Color::from_rgba8(128, 128, 128, 100);
const SELECTION_COLOR: Color = Color::from_rgba8(0, 0, 255, 255);
const HANDLE_FILL: Color = Color::from_rgba8(255, 255, 255, 255);
const PAN_BADGE: Color = Color::from_rgba8(255, 140, 0, 200);
const SELECTION_BADGE: Color = Color::from_rgba8(50, 150, 50, 200);
const BADGE_TEXT: Color = Color::from_rgba8(255, 255, 255, 255);
const CAPTION_COLOR: Color = Color::from_rgba8(0, 0, 0, 150);

/// Context for a single frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a DesignCanvas,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Whether the mode and zoom badges are drawn.
    pub show_badges: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(canvas: &'a DesignCanvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            show_badges: true,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Hide the mode and zoom badges, e.g. for export snapshots.
    pub fn without_badges(mut self) -> Self {
        self.show_badges = false;
        self
    }
}

/// Trait for rendering backends.
///
/// Backends rasterize the display list; all layout decisions are already
/// made by [`build_frame`].
pub trait Renderer: Send + Sync {
    fn render(&mut self, frame: &Frame, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Build the display list for one frame.
///
/// Pass order: grid, components back to front, selection chrome, overlay
/// badges. Later ops paint over earlier ones.
pub fn build_frame(ctx: &RenderContext) -> Frame {
    let mut frame = Frame {
        transform: ctx.canvas.view.transform(),
        ..Frame::default()
    };

    if ctx.canvas.grid.show_grid {
        push_grid(&mut frame, ctx);
    }

    for component in ctx.canvas.components() {
        push_component(&mut frame, component);
    }

    if ctx.canvas.mode() == InteractionMode::Selection {
        if let Some(selected) = ctx.canvas.selected_component() {
            push_selection_chrome(&mut frame, selected);
        }
    }

    if ctx.show_badges {
        push_badges(&mut frame, ctx);
    }

    log::trace!(
        "frame: {} ops, {} components",
        frame.op_count(),
        ctx.canvas.components().len()
    );
    frame
}

fn push_grid(frame: &mut Frame, ctx: &RenderContext) {
    // Cover the whole viewport in canvas units at the current zoom.
    let zoom = ctx.canvas.view.zoom();
    let extent_x = ctx.viewport_size.width / zoom;
    let extent_y = ctx.viewport_size.height / zoom;

    let mut x = 0.0;
    while x < extent_x {
        frame.canvas.push(DrawOp::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, extent_y),
            color: GRID_COLOR,
            width: 1.0,
        });
        x += VISUAL_GRID_SPACING;
    }
    let mut y = 0.0;
    while y < extent_y {
        frame.canvas.push(DrawOp::Line {
            from: Point::new(0.0, y),
            to: Point::new(extent_x, y),
            color: GRID_COLOR,
            width: 1.0,
        });
        y += VISUAL_GRID_SPACING;
    }
}

fn push_component(frame: &mut Frame, component: &PlacedComponent) {
    if !component.visible {
        return;
    }
    let rect = component.bounds.as_rect();

    let fill = if component.enabled {
        component.background
    } else {
        component.background.darker()
    };
    frame.canvas.push(DrawOp::FillRect {
        rect,
        color: fill.into(),
    });
    frame.canvas.push(DrawOp::StrokeRect {
        rect,
        color: BORDER_COLOR,
        width: 1.0,
    });

    if component.kind == WidgetKind::CheckBox {
        push_checkbox_glyph(frame, component);
    }

    if !component.text.is_empty() {
        push_component_text(frame, component);
    }

    if !component.enabled {
        frame.canvas.push(DrawOp::FillRect {
            rect,
            color: DISABLED_OVERLAY,
        });
    }
}

fn push_checkbox_glyph(frame: &mut Frame, component: &PlacedComponent) {
    let check_size = 12.0;
    let b = component.bounds;
    let x = f64::from(b.x) + 5.0;
    let y = f64::from(b.y) + (f64::from(b.height) - check_size) / 2.0;
    let square = Rect::new(x, y, x + check_size, y + check_size);

    frame.canvas.push(DrawOp::FillRect {
        rect: square,
        color: HANDLE_FILL,
    });
    frame.canvas.push(DrawOp::StrokeRect {
        rect: square,
        color: BORDER_COLOR,
        width: 1.0,
    });
    if component.selected {
        frame.canvas.push(DrawOp::Line {
            from: Point::new(x + 2.0, y + 6.0),
            to: Point::new(x + 5.0, y + 9.0),
            color: BORDER_COLOR,
            width: 1.0,
        });
        frame.canvas.push(DrawOp::Line {
            from: Point::new(x + 5.0, y + 9.0),
            to: Point::new(x + 10.0, y + 4.0),
            color: BORDER_COLOR,
            width: 1.0,
        });
    }
}

fn push_component_text(frame: &mut Frame, component: &PlacedComponent) {
    let b = component.bounds;
    let center_y = f64::from(b.y) + f64::from(b.height) / 2.0;
    // Checkbox text sits to the right of the glyph; everything else centers.
    let (position, align) = if component.kind == WidgetKind::CheckBox {
        (Point::new(f64::from(b.x) + 20.0, center_y), TextAlign::Left)
    } else {
        (
            Point::new(f64::from(b.x) + f64::from(b.width) / 2.0, center_y),
            TextAlign::Center,
        )
    };
    frame.canvas.push(DrawOp::Text {
        position,
        content: component.text.clone(),
        color: if component.enabled {
            BORDER_COLOR
        } else {
            DISABLED_TEXT
        },
        size: 12.0,
        bold: false,
        align,
    });
}

fn push_selection_chrome(frame: &mut Frame, component: &PlacedComponent) {
    let outline = component.bounds.as_rect().inflate(2.0, 2.0);
    frame.canvas.push(DrawOp::StrokeRect {
        rect: outline,
        color: SELECTION_COLOR,
        width: 1.0,
    });

    let half = f64::from(HANDLE_SIZE) / 2.0;
    for handle in ResizeHandle::ALL {
        let center = handle.center(component.bounds);
        let square = Rect::new(
            f64::from(center.x) - half,
            f64::from(center.y) - half,
            f64::from(center.x) + half,
            f64::from(center.y) + half,
        );
        frame.canvas.push(DrawOp::FillRect {
            rect: square,
            color: HANDLE_FILL,
        });
        frame.canvas.push(DrawOp::StrokeRect {
            rect: square,
            color: SELECTION_COLOR,
            width: 1.0,
        });
    }
}

/// Rough text extent for badge backgrounds; backends with real metrics can
/// redo this layout, the estimate only sizes the rounded plates.
fn approx_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.6
}

fn push_badges(frame: &mut Frame, ctx: &RenderContext) {
    let mode = ctx.canvas.mode();
    let info = mode.info();
    let badge_color = match mode {
        InteractionMode::Pan => PAN_BADGE,
        InteractionMode::Selection => SELECTION_BADGE,
    };

    let mode_width = approx_text_width(info.display_name, 12.0);
    frame.overlay.push(DrawOp::FillRoundedRect {
        rect: Rect::new(10.0, 10.0, 10.0 + mode_width + 20.0, 35.0),
        radius: 8.0,
        color: badge_color,
    });
    frame.overlay.push(DrawOp::Text {
        position: Point::new(20.0, 28.0),
        content: info.display_name.to_string(),
        color: BADGE_TEXT,
        size: 12.0,
        bold: true,
        align: TextAlign::Left,
    });
    frame.overlay.push(DrawOp::Text {
        position: Point::new(20.0, 50.0),
        content: info.description.to_string(),
        color: CAPTION_COLOR,
        size: 10.0,
        bold: false,
        align: TextAlign::Left,
    });

    let zoom_text = format!("Zoom: {}%", ctx.canvas.view.zoom_percent());
    let zoom_width = approx_text_width(&zoom_text, 12.0);
    let right = ctx.viewport_size.width;
    frame.overlay.push(DrawOp::FillRoundedRect {
        rect: Rect::new(right - zoom_width - 20.0, 10.0, right - 5.0, 30.0),
        radius: 5.0,
        color: CAPTION_COLOR,
    });
    frame.overlay.push(DrawOp::Text {
        position: Point::new(right - 12.0, 25.0),
        content: zoom_text,
        color: BADGE_TEXT,
        size: 12.0,
        bold: true,
        align: TextAlign::Right,
    });
}
