//! FormDraft Core Library
//!
//! Platform-agnostic data structures and interaction logic for the FormDraft
//! visual form designer.

pub mod camera;
pub mod canvas;
pub mod codegen;
pub mod component;
pub mod handles;
pub mod input;
pub mod screen;
pub mod snap;

pub use camera::{CanvasPoint, CanvasView, MAX_ZOOM, MIN_ZOOM, RULER_INSET, ZOOM_STEP};
pub use canvas::{
    CanvasEvent, CursorKind, DesignCanvas, EventOutcome, InteractionMode, ModeInfo,
};
pub use codegen::generate_form_source;
pub use component::{
    Bounds, ComponentId, KindDefaults, MIN_SIZE, PlacedComponent, Rgb, WidgetKind,
};
pub use handles::{HANDLE_SIZE, ResizeHandle};
pub use input::{Key, Modifiers, MouseButton, PointerEvent};
pub use screen::{
    Project, ProjectContext, ProjectError, ProjectEvent, Screen, ScreenKind, ScreenSettings,
};
pub use snap::{DEFAULT_GRID_SIZE, GridSettings, snap_position, snap_size};
