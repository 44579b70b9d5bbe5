//! FormDraft Render Library
//!
//! Backend-agnostic frame building for the FormDraft designer canvas. The
//! frame builder turns canvas state into a display list; backends implement
//! [`Renderer`] to rasterize it.

mod renderer;
mod scene;

pub use renderer::{
    RenderContext, RenderError, RenderResult, Renderer, VISUAL_GRID_SPACING, build_frame,
};
pub use scene::{DrawOp, Frame, TextAlign};
