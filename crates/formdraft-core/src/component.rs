//! Placed-component model: widget kinds, per-kind defaults, and bounds.

use crate::camera::CanvasPoint;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for placed components.
pub type ComponentId = Uuid;

/// Minimum component edge length, enforced by the manipulation state machine.
pub const MIN_SIZE: i32 = 20;

/// Serializable RGB triple for component backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub const fn light_gray() -> Self {
        Self::new(192, 192, 192)
    }

    /// Darkened variant used for the disabled fill (scale factor 0.7).
    pub fn darker(self) -> Self {
        Self::new(
            (f64::from(self.r) * 0.7) as u8,
            (f64::from(self.g) * 0.7) as u8,
            (f64::from(self.b) * 0.7) as u8,
        )
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// The closed set of widget kinds the designer can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    Button,
    Label,
    TextField,
    CheckBox,
    Panel,
    ComboBox,
    List,
    TextArea,
}

/// Per-kind design-time defaults and capability flags.
///
/// Kind-specific behavior is expressed as data rather than per-variant
/// dispatch, so adding a kind means adding a table row.
#[derive(Debug, Clone, Copy)]
pub struct KindDefaults {
    /// Default (width, height) when dropped on the canvas.
    pub size: (i32, i32),
    /// Default display text; `None` falls back to the kind's display name.
    pub text: Option<&'static str>,
    /// Default background fill.
    pub background: Rgb,
    /// Whether the `columns` attribute is meaningful for this kind.
    pub has_columns: bool,
    /// Whether the `editable` attribute is meaningful for this kind.
    pub has_editable: bool,
    /// Whether the `selected` attribute is meaningful for this kind.
    pub has_selected: bool,
}

impl WidgetKind {
    /// All kinds, in palette order.
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::Button,
        WidgetKind::Label,
        WidgetKind::TextField,
        WidgetKind::CheckBox,
        WidgetKind::Panel,
        WidgetKind::ComboBox,
        WidgetKind::List,
        WidgetKind::TextArea,
    ];

    /// Human-readable kind name, also the fallback default text.
    pub fn display_name(self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::Label => "Label",
            WidgetKind::TextField => "TextField",
            WidgetKind::CheckBox => "CheckBox",
            WidgetKind::Panel => "Panel",
            WidgetKind::ComboBox => "ComboBox",
            WidgetKind::List => "List",
            WidgetKind::TextArea => "TextArea",
        }
    }

    /// Design-time defaults for this kind.
    pub fn defaults(self) -> KindDefaults {
        const PLAIN: KindDefaults = KindDefaults {
            size: (100, 30),
            text: None,
            background: Rgb::light_gray(),
            has_columns: false,
            has_editable: false,
            has_selected: false,
        };
        match self {
            WidgetKind::Button => KindDefaults {
                text: Some("Button"),
                ..PLAIN
            },
            WidgetKind::Label => KindDefaults {
                text: Some("Label"),
                ..PLAIN
            },
            WidgetKind::TextField => KindDefaults {
                size: (120, 25),
                text: Some("TextField"),
                has_columns: true,
                has_editable: true,
                ..PLAIN
            },
            WidgetKind::CheckBox => KindDefaults {
                text: Some("CheckBox"),
                has_selected: true,
                ..PLAIN
            },
            WidgetKind::Panel => KindDefaults {
                size: (150, 100),
                background: Rgb::white(),
                ..PLAIN
            },
            WidgetKind::ComboBox | WidgetKind::List | WidgetKind::TextArea => PLAIN,
        }
    }
}

/// An integer rectangle in canvas (unscaled, unpanned) coordinates.
///
/// `Bounds` is a value type: mutations replace the whole record, so no two
/// readers can alias a half-updated rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Same size, new origin.
    pub const fn with_origin(&self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Same origin, new size.
    pub const fn with_size(&self, width: i32, height: i32) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// Float rect for the render pass.
    pub fn as_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

/// One design-time placeholder element on a screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub(crate) id: ComponentId,
    pub kind: WidgetKind,
    pub bounds: Bounds,
    pub text: String,
    pub background: Rgb,
    pub visible: bool,
    pub enabled: bool,
    /// Meaningful for TextField only; always present.
    pub editable: bool,
    /// Meaningful for CheckBox only; always present.
    pub selected: bool,
    /// Meaningful for TextField only; always present.
    pub columns: i32,
}

impl PlacedComponent {
    /// Create a component of `kind` at `(x, y)` with the kind's default
    /// size, text, and background.
    pub fn new(kind: WidgetKind, x: i32, y: i32) -> Self {
        let defaults = kind.defaults();
        let (width, height) = defaults.size;
        Self {
            id: Uuid::new_v4(),
            kind,
            bounds: Bounds::new(x, y, width, height),
            text: defaults.text.unwrap_or(kind.display_name()).to_string(),
            background: defaults.background,
            visible: true,
            enabled: true,
            editable: true,
            selected: false,
            columns: 10,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Duplicate this component with a fresh identity.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.bounds = self.bounds.with_origin(x, y);
    }

    pub fn resize_to(&mut self, width: i32, height: i32) {
        self.bounds = self.bounds.with_size(width, height);
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn set_columns(&mut self, columns: i32) {
        self.columns = columns;
    }

    /// Bounds containment in canvas coordinates. Callers skip invisible
    /// components before asking.
    pub fn hit_test(&self, point: CanvasPoint) -> bool {
        self.bounds.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_defaults() {
        let button = PlacedComponent::new(WidgetKind::Button, 50, 50);
        assert_eq!(button.bounds, Bounds::new(50, 50, 100, 30));
        assert_eq!(button.text, "Button");
        assert_eq!(button.background, Rgb::light_gray());
        assert!(button.visible);
        assert!(button.enabled);
    }

    #[test]
    fn test_panel_defaults() {
        let panel = PlacedComponent::new(WidgetKind::Panel, 0, 0);
        assert_eq!(panel.bounds, Bounds::new(0, 0, 150, 100));
        assert_eq!(panel.background, Rgb::white());
        assert_eq!(panel.text, "Panel");
    }

    #[test]
    fn test_text_field_defaults() {
        let field = PlacedComponent::new(WidgetKind::TextField, 10, 20);
        assert_eq!(field.bounds, Bounds::new(10, 20, 120, 25));
        assert_eq!(field.text, "TextField");
        assert_eq!(field.columns, 10);
        assert!(field.editable);
        assert!(field.kind.defaults().has_columns);
    }

    #[test]
    fn test_fallback_text_is_display_name() {
        let combo = PlacedComponent::new(WidgetKind::ComboBox, 0, 0);
        assert_eq!(combo.text, "ComboBox");
        let list = PlacedComponent::new(WidgetKind::List, 0, 0);
        assert_eq!(list.text, "List");
    }

    #[test]
    fn test_bounds_containment() {
        let bounds = Bounds::new(10, 10, 100, 30);
        assert!(bounds.contains(CanvasPoint::new(10, 10)));
        assert!(bounds.contains(CanvasPoint::new(50, 25)));
        assert!(!bounds.contains(CanvasPoint::new(110, 10)));
        assert!(!bounds.contains(CanvasPoint::new(9, 10)));
    }

    #[test]
    fn test_bounds_value_semantics() {
        let mut comp = PlacedComponent::new(WidgetKind::Button, 0, 0);
        let before = comp.bounds;
        comp.move_to(40, 60);
        assert_eq!(before, Bounds::new(0, 0, 100, 30));
        assert_eq!(comp.bounds, Bounds::new(40, 60, 100, 30));
    }

    #[test]
    fn test_darker() {
        let gray = Rgb::light_gray().darker();
        assert_eq!(gray, Rgb::new(134, 134, 134));
    }

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let original = PlacedComponent::new(WidgetKind::CheckBox, 5, 5);
        let copy = original.duplicate();
        assert_ne!(original.id(), copy.id());
        assert_eq!(original.bounds, copy.bounds);
        assert_eq!(original.text, copy.text);
    }
}
