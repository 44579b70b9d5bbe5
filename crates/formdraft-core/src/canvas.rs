//! Design canvas state: interaction modes, the pointer gesture machine, and
//! the component list being edited.

use crate::camera::{CanvasPoint, CanvasView};
use crate::component::{ComponentId, PlacedComponent, WidgetKind};
use crate::handles::{self, ResizeHandle};
use crate::input::{Key, MouseButton, PointerEvent};
use crate::snap::{GridSettings, snap_position};
use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

/// Arrow-key nudge distance for a selected component. Nudges are deliberate
/// fine adjustments and never snap.
pub const NUDGE_STEP: i32 = 10;
/// Arrow-key pan distance in pan mode, in screen pixels.
pub const PAN_KEY_STEP: i32 = 20;

/// Cursor shapes the host window should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorKind {
    Arrow,
    Move,
    Grab,
    Grabbing,
    ResizeNs,
    ResizeEw,
    ResizeNwSe,
    ResizeNeSw,
}

/// Static description of an interaction mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeInfo {
    pub display_name: &'static str,
    pub description: &'static str,
    /// Cursor shown when no gesture or hover target overrides it.
    pub base_cursor: CursorKind,
}

/// The canvas's top-level interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Selection,
    Pan,
}

impl InteractionMode {
    /// Mode metadata as a data table; adding a mode means adding a row.
    pub fn info(self) -> &'static ModeInfo {
        const SELECTION: ModeInfo = ModeInfo {
            display_name: "Selection",
            description: "Select, move, and resize components",
            base_cursor: CursorKind::Arrow,
        };
        const PAN: ModeInfo = ModeInfo {
            display_name: "Pan",
            description: "Drag to scroll the canvas",
            base_cursor: CursorKind::Grab,
        };
        match self {
            InteractionMode::Selection => &SELECTION,
            InteractionMode::Pan => &PAN,
        }
    }

    /// The other mode, for the keyboard toggle.
    pub fn toggled(self) -> InteractionMode {
        match self {
            InteractionMode::Selection => InteractionMode::Pan,
            InteractionMode::Pan => InteractionMode::Selection,
        }
    }
}

/// The in-flight pointer gesture, advanced by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Idle,
    /// Pressed on a component but not yet moved; a plain click stays here.
    Armed {
        id: ComponentId,
        grab_dx: i32,
        grab_dy: i32,
    },
    Dragging {
        id: ComponentId,
        grab_dx: i32,
        grab_dy: i32,
    },
    Resizing {
        id: ComponentId,
        handle: ResizeHandle,
    },
    Panning {
        last_x: i32,
        last_y: i32,
    },
}

/// Notifications drained by the embedding shell after each event batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasEvent {
    ComponentAdded(ComponentId),
    ComponentRemoved(ComponentId),
    /// Bounds or properties changed; fired once per completed gesture, not
    /// per intermediate pointer move.
    ComponentModified(ComponentId),
    SelectionChanged(Option<ComponentId>),
    ModeChanged(InteractionMode),
    ViewChanged,
}

/// Whether the canvas consumed an event or left it for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

/// The interactive design surface for one screen.
///
/// All pointer positions arrive in screen space and are converted through
/// [`CanvasView`] before hit testing; component bounds stay in canvas space.
#[derive(Debug, Clone)]
pub struct DesignCanvas {
    components: Vec<PlacedComponent>,
    pub view: CanvasView,
    pub grid: GridSettings,
    mode: InteractionMode,
    selected: Option<ComponentId>,
    gesture: Gesture,
    events: Vec<CanvasEvent>,
}

impl Default for DesignCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignCanvas {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            view: CanvasView::new(),
            grid: GridSettings::default(),
            mode: InteractionMode::Selection,
            selected: None,
            gesture: Gesture::Idle,
            events: Vec::new(),
        }
    }

    /// Components in placement order (back to front).
    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut PlacedComponent> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn selected(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn selected_component(&self) -> Option<&PlacedComponent> {
        self.selected.and_then(|id| self.component(id))
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the component list wholesale, e.g. when switching screens.
    /// Selection and any in-flight gesture are discarded.
    pub fn set_components(&mut self, components: Vec<PlacedComponent>) {
        self.components = components;
        self.selected = None;
        self.gesture = Gesture::Idle;
    }

    /// Move the component list out, leaving the canvas empty.
    pub fn take_components(&mut self) -> Vec<PlacedComponent> {
        self.selected = None;
        self.gesture = Gesture::Idle;
        std::mem::take(&mut self.components)
    }

    /// Switch interaction mode. Entering pan mode drops the selection; a
    /// panning surface has no manipulation target.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode == mode {
            return;
        }
        debug!("mode -> {}", mode.info().display_name);
        self.mode = mode;
        self.gesture = Gesture::Idle;
        if mode == InteractionMode::Pan {
            self.select(None);
        }
        self.events.push(CanvasEvent::ModeChanged(mode));
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn select(&mut self, id: Option<ComponentId>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.events.push(CanvasEvent::SelectionChanged(id));
    }

    /// Topmost visible component under a canvas point.
    pub fn component_at(&self, point: CanvasPoint) -> Option<&PlacedComponent> {
        self.components
            .iter()
            .rev()
            .find(|c| c.visible && c.hit_test(point))
    }

    /// Drop a new component of `kind` at a screen position. The drop lands
    /// at the raw converted point; snapping only applies to drags and
    /// resizes.
    pub fn drop_component(&mut self, kind: WidgetKind, screen: Point) -> ComponentId {
        let canvas = self.view.screen_to_canvas(screen);
        let (x, y) = (canvas.x, canvas.y);
        let component = PlacedComponent::new(kind, x, y);
        let id = component.id();
        debug!("drop {} at ({x}, {y})", kind.display_name());
        self.components.push(component);
        self.events.push(CanvasEvent::ComponentAdded(id));
        self.select(Some(id));
        id
    }

    /// Remove a component by id, clearing the selection if it was selected.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<PlacedComponent> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        let removed = self.components.remove(index);
        if self.selected == Some(id) {
            self.select(None);
        }
        self.events.push(CanvasEvent::ComponentRemoved(id));
        Some(removed)
    }

    /// Process a pointer event against the current mode and gesture.
    pub fn on_pointer(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer_down(position);
                EventOutcome::Handled
            }
            PointerEvent::Down { .. } => EventOutcome::Ignored,
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer_up(position);
                EventOutcome::Handled
            }
            PointerEvent::Up { .. } => EventOutcome::Ignored,
            PointerEvent::Scroll {
                position,
                delta,
                modifiers,
            } => {
                if !modifiers.ctrl {
                    return EventOutcome::Ignored;
                }
                self.view.zoom_at(position, delta.y > 0.0);
                self.events.push(CanvasEvent::ViewChanged);
                EventOutcome::Handled
            }
        }
    }

    fn pointer_down(&mut self, position: Point) {
        if self.mode == InteractionMode::Pan {
            self.gesture = Gesture::Panning {
                last_x: position.x as i32,
                last_y: position.y as i32,
            };
            return;
        }

        let canvas = self.view.screen_to_canvas(position);

        // Handles of the current selection win over component bodies, so a
        // corner shared with an overlapping component still resizes.
        if let Some(selected) = self.selected_component() {
            if let Some(handle) = handles::hit_test(selected.bounds, canvas) {
                self.gesture = Gesture::Resizing {
                    id: selected.id(),
                    handle,
                };
                return;
            }
        }

        match self.component_at(canvas) {
            Some(component) => {
                let id = component.id();
                let grab_dx = canvas.x - component.bounds.x;
                let grab_dy = canvas.y - component.bounds.y;
                self.gesture = Gesture::Armed {
                    id,
                    grab_dx,
                    grab_dy,
                };
                self.select(Some(id));
            }
            None => {
                self.gesture = Gesture::Idle;
                self.select(None);
            }
        }
    }

    fn pointer_move(&mut self, position: Point) -> EventOutcome {
        match self.gesture {
            Gesture::Idle => EventOutcome::Ignored,
            Gesture::Armed {
                id,
                grab_dx,
                grab_dy,
            } => {
                self.gesture = Gesture::Dragging {
                    id,
                    grab_dx,
                    grab_dy,
                };
                self.drag_to(id, grab_dx, grab_dy, position);
                EventOutcome::Handled
            }
            Gesture::Dragging {
                id,
                grab_dx,
                grab_dy,
            } => {
                self.drag_to(id, grab_dx, grab_dy, position);
                EventOutcome::Handled
            }
            Gesture::Resizing { id, handle } => {
                let canvas = self.view.screen_to_canvas(position);
                let grid = self
                    .grid
                    .snap_to_grid
                    .then(|| self.grid.grid_size());
                if let Some(component) = self.component_mut(id) {
                    component.bounds = handles::resize_with_snap(
                        component.bounds,
                        handle,
                        canvas,
                        grid,
                    );
                }
                EventOutcome::Handled
            }
            Gesture::Panning { last_x, last_y } => {
                let x = position.x as i32;
                let y = position.y as i32;
                self.view.pan_by(x - last_x, y - last_y);
                self.gesture = Gesture::Panning {
                    last_x: x,
                    last_y: y,
                };
                self.events.push(CanvasEvent::ViewChanged);
                EventOutcome::Handled
            }
        }
    }

    fn drag_to(&mut self, id: ComponentId, grab_dx: i32, grab_dy: i32, position: Point) {
        let canvas = self.view.screen_to_canvas(position);
        let mut x = canvas.x - grab_dx;
        let mut y = canvas.y - grab_dy;
        if self.grid.snap_to_grid {
            let grid = self.grid.grid_size();
            x = snap_position(x, grid);
            y = snap_position(y, grid);
        }
        if let Some(component) = self.component_mut(id) {
            component.move_to(x, y);
        }
    }

    fn pointer_up(&mut self, _position: Point) {
        match self.gesture {
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => {
                self.events.push(CanvasEvent::ComponentModified(id));
            }
            Gesture::Idle | Gesture::Armed { .. } | Gesture::Panning { .. } => {}
        }
        self.gesture = Gesture::Idle;
    }

    /// Process a key press.
    pub fn on_key(&mut self, key: Key) -> EventOutcome {
        match (self.mode, key) {
            (_, Key::Space) => {
                self.toggle_mode();
                EventOutcome::Handled
            }
            (InteractionMode::Selection, Key::Escape) => {
                self.select(None);
                EventOutcome::Handled
            }
            (InteractionMode::Selection, Key::Delete) => match self.selected {
                Some(id) => {
                    self.remove_component(id);
                    EventOutcome::Handled
                }
                None => EventOutcome::Ignored,
            },
            (InteractionMode::Selection, arrow) => self.nudge_selected(arrow),
            (InteractionMode::Pan, arrow) => self.pan_by_key(arrow),
        }
    }

    fn nudge_selected(&mut self, key: Key) -> EventOutcome {
        let (dx, dy) = match key {
            Key::ArrowLeft => (-NUDGE_STEP, 0),
            Key::ArrowRight => (NUDGE_STEP, 0),
            Key::ArrowUp => (0, -NUDGE_STEP),
            Key::ArrowDown => (0, NUDGE_STEP),
            _ => return EventOutcome::Ignored,
        };
        let Some(id) = self.selected else {
            return EventOutcome::Ignored;
        };
        if let Some(component) = self.component_mut(id) {
            let bounds = component.bounds;
            component.move_to(bounds.x + dx, bounds.y + dy);
            self.events.push(CanvasEvent::ComponentModified(id));
        }
        EventOutcome::Handled
    }

    fn pan_by_key(&mut self, key: Key) -> EventOutcome {
        // Arrows move the content, not the viewport: left arrow shifts the
        // canvas rightward under a fixed window, so right and down subtract.
        let (dx, dy) = match key {
            Key::ArrowLeft => (PAN_KEY_STEP, 0),
            Key::ArrowRight => (-PAN_KEY_STEP, 0),
            Key::ArrowUp => (0, PAN_KEY_STEP),
            Key::ArrowDown => (0, -PAN_KEY_STEP),
            _ => return EventOutcome::Ignored,
        };
        self.view.pan_by(dx, dy);
        self.events.push(CanvasEvent::ViewChanged);
        EventOutcome::Handled
    }

    /// Cursor for the pointer at a screen position, given the current mode,
    /// gesture, and hover target.
    pub fn cursor_at(&self, position: Point) -> CursorKind {
        match self.gesture {
            Gesture::Panning { .. } => return CursorKind::Grabbing,
            Gesture::Dragging { .. } | Gesture::Armed { .. } => return CursorKind::Move,
            Gesture::Resizing { handle, .. } => return handle_cursor(handle),
            Gesture::Idle => {}
        }
        if self.mode == InteractionMode::Pan {
            return self.mode.info().base_cursor;
        }
        let canvas = self.view.screen_to_canvas(position);
        if let Some(selected) = self.selected_component() {
            if let Some(handle) = handles::hit_test(selected.bounds, canvas) {
                return handle_cursor(handle);
            }
        }
        if self.component_at(canvas).is_some() {
            return CursorKind::Move;
        }
        self.mode.info().base_cursor
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.events.push(CanvasEvent::ViewChanged);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
        self.events.push(CanvasEvent::ViewChanged);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.events.push(CanvasEvent::ViewChanged);
    }

    /// Zoom as a whole percentage, for the status display poll.
    pub fn zoom_percent(&self) -> u32 {
        self.view.zoom_percent()
    }
}

fn handle_cursor(handle: ResizeHandle) -> CursorKind {
    match handle {
        ResizeHandle::N | ResizeHandle::S => CursorKind::ResizeNs,
        ResizeHandle::E | ResizeHandle::W => CursorKind::ResizeEw,
        ResizeHandle::Nw | ResizeHandle::Se => CursorKind::ResizeNwSe,
        ResizeHandle::Ne | ResizeHandle::Sw => CursorKind::ResizeNeSw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Bounds, MIN_SIZE};
    use crate::input::Modifiers;
    use kurbo::Vec2;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_drop_places_and_selects() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));

        let component = canvas.component(id).unwrap();
        assert_eq!(component.bounds, Bounds::new(50, 50, 100, 30));
        assert_eq!(canvas.selected(), Some(id));

        let events = canvas.take_events();
        assert!(events.contains(&CanvasEvent::ComponentAdded(id)));
        assert!(events.contains(&CanvasEvent::SelectionChanged(Some(id))));
    }

    #[test]
    fn test_drop_point_is_never_snapped() {
        let mut canvas = DesignCanvas::new();
        assert!(canvas.grid.snap_to_grid);
        let id = canvas.drop_component(WidgetKind::Button, Point::new(57.0, 43.0));
        // Off-grid drops stay where they land; only drags and resizes snap.
        assert_eq!(canvas.component(id).unwrap().bounds, Bounds::new(57, 43, 100, 30));
    }

    #[test]
    fn test_click_selects_topmost() {
        let mut canvas = DesignCanvas::new();
        let bottom = canvas.drop_component(WidgetKind::Panel, Point::new(0.0, 0.0));
        let top = canvas.drop_component(WidgetKind::Button, Point::new(20.0, 20.0));
        canvas.take_events();

        // (30, 30) lands inside both; the later drop wins.
        canvas.on_pointer(down(30.0, 30.0));
        canvas.on_pointer(up(30.0, 30.0));
        assert_eq!(canvas.selected(), Some(top));
        assert_ne!(canvas.selected(), Some(bottom));
    }

    #[test]
    fn test_click_skips_invisible() {
        let mut canvas = DesignCanvas::new();
        let bottom = canvas.drop_component(WidgetKind::Panel, Point::new(0.0, 0.0));
        let top = canvas.drop_component(WidgetKind::Button, Point::new(20.0, 20.0));
        canvas.component_mut(top).unwrap().set_visible(false);
        canvas.take_events();

        canvas.on_pointer(down(30.0, 30.0));
        assert_eq!(canvas.selected(), Some(bottom));
    }

    #[test]
    fn test_click_on_empty_clears_selection() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(0.0, 0.0));
        assert_eq!(canvas.selected(), Some(id));

        canvas.on_pointer(down(500.0, 500.0));
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn test_drag_moves_with_snap() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.take_events();

        // Grab at (60, 60), 10 px inside the component.
        canvas.on_pointer(down(60.0, 60.0));
        canvas.on_pointer(mv(123.0, 87.0));
        canvas.on_pointer(up(123.0, 87.0));

        // Raw origin would be (113, 77); snap truncates to (110, 70).
        let component = canvas.component(id).unwrap();
        assert_eq!(component.bounds, Bounds::new(110, 70, 100, 30));
        assert!(
            canvas
                .take_events()
                .contains(&CanvasEvent::ComponentModified(id))
        );
    }

    #[test]
    fn test_plain_click_emits_no_modification() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.take_events();

        canvas.on_pointer(down(60.0, 60.0));
        canvas.on_pointer(up(60.0, 60.0));
        assert!(
            !canvas
                .take_events()
                .contains(&CanvasEvent::ComponentModified(id))
        );
    }

    #[test]
    fn test_resize_via_se_handle() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.take_events();

        // Button spans (50, 50, 100, 30); the SE handle sits at (150, 80).
        canvas.on_pointer(down(150.0, 80.0));
        canvas.on_pointer(mv(200.0, 120.0));
        canvas.on_pointer(up(200.0, 120.0));

        let component = canvas.component(id).unwrap();
        assert_eq!(component.bounds, Bounds::new(50, 50, 150, 70));
    }

    #[test]
    fn test_resize_honors_min_size() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.take_events();

        canvas.on_pointer(down(150.0, 80.0));
        canvas.on_pointer(mv(40.0, 40.0));
        canvas.on_pointer(up(40.0, 40.0));

        let bounds = canvas.component(id).unwrap().bounds;
        assert_eq!(bounds.width, MIN_SIZE);
        assert_eq!(bounds.height, MIN_SIZE);
    }

    #[test]
    fn test_handle_beats_overlapping_component() {
        let mut canvas = DesignCanvas::new();
        let selected = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.drop_component(WidgetKind::Panel, Point::new(140.0, 70.0));
        canvas.select(Some(selected));
        canvas.take_events();

        // (150, 80) is the button's SE handle and inside the panel.
        canvas.on_pointer(down(150.0, 80.0));
        canvas.on_pointer(mv(170.0, 100.0));
        assert_eq!(canvas.selected(), Some(selected));
        assert_eq!(
            canvas.component(selected).unwrap().bounds,
            Bounds::new(50, 50, 120, 50)
        );
    }

    #[test]
    fn test_space_toggles_mode_and_clears_selection() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(0.0, 0.0));
        assert_eq!(canvas.selected(), Some(id));
        canvas.take_events();

        canvas.on_key(Key::Space);
        assert_eq!(canvas.mode(), InteractionMode::Pan);
        assert_eq!(canvas.selected(), None);
        let events = canvas.take_events();
        assert!(events.contains(&CanvasEvent::ModeChanged(InteractionMode::Pan)));
        assert!(events.contains(&CanvasEvent::SelectionChanged(None)));

        canvas.on_key(Key::Space);
        assert_eq!(canvas.mode(), InteractionMode::Selection);
    }

    #[test]
    fn test_pan_gesture() {
        let mut canvas = DesignCanvas::new();
        canvas.set_mode(InteractionMode::Pan);

        canvas.on_pointer(down(100.0, 100.0));
        canvas.on_pointer(mv(130.0, 80.0));
        assert_eq!(canvas.view.offset_x, 30);
        assert_eq!(canvas.view.offset_y, -20);

        // Deltas accumulate from the last move, not the press point.
        canvas.on_pointer(mv(140.0, 80.0));
        assert_eq!(canvas.view.offset_x, 40);
        canvas.on_pointer(up(140.0, 80.0));
    }

    #[test]
    fn test_pan_mode_ignores_components() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.set_mode(InteractionMode::Pan);
        canvas.take_events();

        canvas.on_pointer(down(60.0, 60.0));
        canvas.on_pointer(mv(80.0, 60.0));
        canvas.on_pointer(up(80.0, 60.0));

        // The press landed on the component but only the view moved.
        assert_eq!(canvas.component(id).unwrap().bounds.x, 50);
        assert_eq!(canvas.view.offset_x, 20);
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn test_nudge_does_not_snap() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(53.0, 50.0));
        canvas.take_events();

        canvas.on_key(Key::ArrowRight);
        canvas.on_key(Key::ArrowUp);
        // 53 stays off-grid; nudges are exact 10 px moves.
        assert_eq!(canvas.component(id).unwrap().bounds.x, 63);
        assert_eq!(canvas.component(id).unwrap().bounds.y, 40);
    }

    #[test]
    fn test_nudge_without_selection_is_ignored() {
        let mut canvas = DesignCanvas::new();
        canvas.drop_component(WidgetKind::Button, Point::new(0.0, 0.0));
        canvas.select(None);
        assert_eq!(canvas.on_key(Key::ArrowLeft), EventOutcome::Ignored);
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(0.0, 0.0));
        canvas.take_events();

        assert_eq!(canvas.on_key(Key::Delete), EventOutcome::Handled);
        assert!(canvas.component(id).is_none());
        assert_eq!(canvas.selected(), None);
        assert!(
            canvas
                .take_events()
                .contains(&CanvasEvent::ComponentRemoved(id))
        );

        assert_eq!(canvas.on_key(Key::Delete), EventOutcome::Ignored);
    }

    #[test]
    fn test_pan_keys_move_content() {
        let mut canvas = DesignCanvas::new();
        canvas.set_mode(InteractionMode::Pan);

        canvas.on_key(Key::ArrowLeft);
        assert_eq!(canvas.view.offset_x, PAN_KEY_STEP);
        canvas.on_key(Key::ArrowRight);
        canvas.on_key(Key::ArrowRight);
        assert_eq!(canvas.view.offset_x, -PAN_KEY_STEP);
        canvas.on_key(Key::ArrowDown);
        assert_eq!(canvas.view.offset_y, -PAN_KEY_STEP);
    }

    #[test]
    fn test_ctrl_scroll_zooms_plain_scroll_passes() {
        let mut canvas = DesignCanvas::new();
        let plain = canvas.on_pointer(PointerEvent::Scroll {
            position: Point::new(100.0, 100.0),
            delta: Vec2::new(0.0, 1.0),
            modifiers: Modifiers::NONE,
        });
        assert_eq!(plain, EventOutcome::Ignored);
        assert!((canvas.view.zoom() - 1.0).abs() < f64::EPSILON);

        let zoomed = canvas.on_pointer(PointerEvent::Scroll {
            position: Point::new(100.0, 100.0),
            delta: Vec2::new(0.0, 1.0),
            modifiers: Modifiers::CTRL,
        });
        assert_eq!(zoomed, EventOutcome::Handled);
        assert!((canvas.view.zoom() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_respects_view_transform() {
        let mut canvas = DesignCanvas::new();
        let id = canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        canvas.view.set_zoom(2.0);
        canvas.view.pan_by(100, 0);
        canvas.take_events();

        // Canvas (60, 60) now sits at screen (220, 120).
        canvas.on_pointer(down(220.0, 120.0));
        assert_eq!(canvas.selected(), Some(id));
    }

    #[test]
    fn test_cursor_reflects_state() {
        let mut canvas = DesignCanvas::new();
        assert_eq!(canvas.cursor_at(Point::new(0.0, 0.0)), CursorKind::Arrow);

        canvas.drop_component(WidgetKind::Button, Point::new(50.0, 50.0));
        assert_eq!(canvas.cursor_at(Point::new(60.0, 60.0)), CursorKind::Move);
        // SE handle of the selection.
        assert_eq!(
            canvas.cursor_at(Point::new(150.0, 80.0)),
            CursorKind::ResizeNwSe
        );

        canvas.set_mode(InteractionMode::Pan);
        assert_eq!(canvas.cursor_at(Point::new(60.0, 60.0)), CursorKind::Grab);
        canvas.on_pointer(down(60.0, 60.0));
        assert_eq!(
            canvas.cursor_at(Point::new(60.0, 60.0)),
            CursorKind::Grabbing
        );
    }

    #[test]
    fn test_set_components_resets_interaction_state() {
        let mut canvas = DesignCanvas::new();
        canvas.drop_component(WidgetKind::Button, Point::new(0.0, 0.0));
        assert!(canvas.selected().is_some());

        canvas.set_components(vec![PlacedComponent::new(WidgetKind::Label, 10, 10)]);
        assert_eq!(canvas.selected(), None);
        assert_eq!(canvas.components().len(), 1);
    }
}
