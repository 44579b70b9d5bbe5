//! Screens, projects, and the context tying a project to the live canvas.

use crate::canvas::DesignCanvas;
use crate::component::{PlacedComponent, Rgb};
use crate::snap::GridSettings;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from project-level screen management.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("screen \"{0}\" already exists")]
    DuplicateScreen(String),
    #[error("no screen named \"{0}\"")]
    UnknownScreen(String),
    #[error("a project must keep at least one screen")]
    LastScreen,
    #[error("project serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Static description of a screen kind.
#[derive(Debug, Clone, Copy)]
pub struct ScreenKindInfo {
    pub display_name: &'static str,
    pub description: &'static str,
}

/// What a screen is for. Purely descriptive apart from the default window
/// settings it seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Main,
    Dialog,
    Login,
    Splash,
    Settings,
    About,
    Wizard,
    Dashboard,
    Report,
    Form,
    List,
    Detail,
    Custom,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 13] = [
        ScreenKind::Main,
        ScreenKind::Dialog,
        ScreenKind::Login,
        ScreenKind::Splash,
        ScreenKind::Settings,
        ScreenKind::About,
        ScreenKind::Wizard,
        ScreenKind::Dashboard,
        ScreenKind::Report,
        ScreenKind::Form,
        ScreenKind::List,
        ScreenKind::Detail,
        ScreenKind::Custom,
    ];

    /// Kind metadata as a data table, like
    /// [`crate::canvas::InteractionMode::info`].
    pub fn info(self) -> ScreenKindInfo {
        let (display_name, description) = match self {
            ScreenKind::Main => ("Main Window", "Primary application window"),
            ScreenKind::Dialog => ("Dialog", "Modal or non-modal dialog"),
            ScreenKind::Login => ("Login Screen", "User authentication screen"),
            ScreenKind::Splash => ("Splash Screen", "Application startup screen"),
            ScreenKind::Settings => ("Settings", "Application settings/preferences"),
            ScreenKind::About => ("About Dialog", "About/information dialog"),
            ScreenKind::Wizard => ("Wizard Page", "Step-by-step wizard page"),
            ScreenKind::Dashboard => ("Dashboard", "Data dashboard or overview"),
            ScreenKind::Report => ("Report", "Data report or summary"),
            ScreenKind::Form => ("Form", "Data entry form"),
            ScreenKind::List => ("List View", "List or table view"),
            ScreenKind::Detail => ("Detail View", "Detail/edit view"),
            ScreenKind::Custom => ("Custom", "Custom screen type"),
        };
        ScreenKindInfo {
            display_name,
            description,
        }
    }

    /// Default window settings for a freshly created screen of this kind.
    pub fn default_settings(self) -> ScreenSettings {
        let base = ScreenSettings {
            width: 800,
            height: 600,
            background: Rgb::white(),
            resizable: true,
            decorated: true,
            center_on_screen: false,
        };
        match self {
            ScreenKind::Dialog => ScreenSettings {
                width: 400,
                height: 300,
                resizable: false,
                ..base
            },
            ScreenKind::Login => ScreenSettings {
                width: 350,
                height: 250,
                center_on_screen: true,
                ..base
            },
            ScreenKind::Splash => ScreenSettings {
                decorated: false,
                center_on_screen: true,
                ..base
            },
            _ => base,
        }
    }
}

/// Window-level settings of a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSettings {
    pub width: i32,
    pub height: i32,
    pub background: Rgb,
    pub resizable: bool,
    pub decorated: bool,
    pub center_on_screen: bool,
}

/// A single screen of a project: its components plus window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    pub name: String,
    pub kind: ScreenKind,
    pub description: String,
    pub visible: bool,
    pub settings: ScreenSettings,
    pub components: Vec<PlacedComponent>,
}

impl Screen {
    pub fn new(name: impl Into<String>, kind: ScreenKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            visible: true,
            settings: kind.default_settings(),
            components: Vec::new(),
        }
    }

    /// Change the kind, re-seeding the settings from the new kind's table.
    pub fn set_kind(&mut self, kind: ScreenKind) {
        self.kind = kind;
        self.settings = kind.default_settings();
    }

    pub fn add_component(&mut self, component: PlacedComponent) {
        self.components.push(component);
    }

    pub fn remove_component(&mut self, id: crate::component::ComponentId) -> Option<PlacedComponent> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        Some(self.components.remove(index))
    }

    pub fn clear_components(&mut self) {
        self.components.clear();
    }
}

/// Project-wide preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub target_resolution: String,
    pub theme: String,
    pub grid: GridSettings,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            target_resolution: "1920x1080".to_string(),
            theme: "Light".to_string(),
            grid: GridSettings::default(),
        }
    }
}

/// A design project: a named collection of screens with one active.
///
/// The invariant that a project always holds at least one screen is enforced
/// here, so every consumer can rely on `active_screen` existing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    screens: Vec<Screen>,
    active: usize,
    pub settings: ProjectSettings,
}

impl Project {
    /// Create a project with a default main screen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            screens: vec![Screen::new("Main Screen", ScreenKind::Main)],
            active: 0,
            settings: ProjectSettings::default(),
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.name == name)
    }

    pub fn screen_mut(&mut self, name: &str) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.name == name)
    }

    pub fn active_screen(&self) -> &Screen {
        &self.screens[self.active]
    }

    pub fn active_screen_mut(&mut self) -> &mut Screen {
        &mut self.screens[self.active]
    }

    /// Add a screen; names are unique within a project.
    pub fn add_screen(&mut self, screen: Screen) -> Result<(), ProjectError> {
        if self.screen(&screen.name).is_some() {
            return Err(ProjectError::DuplicateScreen(screen.name));
        }
        self.screens.push(screen);
        Ok(())
    }

    /// Remove a screen by name. The last remaining screen cannot be removed;
    /// removing the active screen activates the first.
    pub fn remove_screen(&mut self, name: &str) -> Result<Screen, ProjectError> {
        if self.screens.len() == 1 {
            return Err(ProjectError::LastScreen);
        }
        let index = self
            .screens
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| ProjectError::UnknownScreen(name.to_string()))?;
        let removed = self.screens.remove(index);
        if self.active >= index && self.active > 0 {
            self.active = if self.active == index { 0 } else { self.active - 1 };
        }
        Ok(removed)
    }

    pub fn set_active(&mut self, name: &str) -> Result<(), ProjectError> {
        let index = self
            .screens
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| ProjectError::UnknownScreen(name.to_string()))?;
        self.active = index;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let mut project: Project = serde_json::from_str(json)?;
        if project.screens.is_empty() {
            project.screens.push(Screen::new("Main Screen", ScreenKind::Main));
        }
        if project.active >= project.screens.len() {
            project.active = 0;
        }
        Ok(project)
    }
}

/// Notifications drained by the embedding shell, mirroring
/// [`crate::canvas::CanvasEvent`] at the project level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectEvent {
    ProjectLoaded,
    ScreenAdded(String),
    ScreenRemoved(String),
    ScreenActivated(String),
}

/// Binds a project to a live [`DesignCanvas`].
///
/// The active screen's components live inside the canvas while it is being
/// edited and are written back when another screen is activated or the
/// project is saved.
#[derive(Debug)]
pub struct ProjectContext {
    project: Project,
    pub canvas: DesignCanvas,
    events: Vec<ProjectEvent>,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectContext {
    pub fn new() -> Self {
        Self::load(Project::new("Untitled Project"))
    }

    /// Load a project, editing its active screen.
    pub fn load(project: Project) -> Self {
        let mut canvas = DesignCanvas::new();
        canvas.grid = project.settings.grid.clone();
        let mut context = Self {
            project,
            canvas,
            events: vec![ProjectEvent::ProjectLoaded],
        };
        let components = std::mem::take(&mut context.project.active_screen_mut().components);
        context.canvas.set_components(components);
        info!("loaded project \"{}\"", context.project.name);
        context
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn active_screen_name(&self) -> &str {
        &self.project.active_screen().name
    }

    pub fn take_events(&mut self) -> Vec<ProjectEvent> {
        std::mem::take(&mut self.events)
    }

    /// Write the canvas's component list back into the active screen.
    pub fn sync_active_screen(&mut self) {
        let components = self.canvas.components().to_vec();
        self.project.active_screen_mut().components = components;
    }

    pub fn add_screen(&mut self, screen: Screen) -> Result<(), ProjectError> {
        let name = screen.name.clone();
        self.project.add_screen(screen)?;
        self.events.push(ProjectEvent::ScreenAdded(name));
        Ok(())
    }

    pub fn remove_screen(&mut self, name: &str) -> Result<(), ProjectError> {
        let was_active = self.active_screen_name() == name;
        self.project.remove_screen(name)?;
        self.events
            .push(ProjectEvent::ScreenRemoved(name.to_string()));
        if was_active {
            let components = std::mem::take(&mut self.project.active_screen_mut().components);
            self.canvas.set_components(components);
            self.events
                .push(ProjectEvent::ScreenActivated(self.active_screen_name().to_string()));
        }
        Ok(())
    }

    /// Switch the canvas to another screen, saving the current one first.
    pub fn activate_screen(&mut self, name: &str) -> Result<(), ProjectError> {
        if self.active_screen_name() == name {
            return Ok(());
        }
        if self.project.screen(name).is_none() {
            return Err(ProjectError::UnknownScreen(name.to_string()));
        }
        let outgoing = self.canvas.take_components();
        self.project.active_screen_mut().components = outgoing;
        self.project.set_active(name)?;
        let incoming = std::mem::take(&mut self.project.active_screen_mut().components);
        self.canvas.set_components(incoming);
        self.events
            .push(ProjectEvent::ScreenActivated(name.to_string()));
        Ok(())
    }

    /// Serialize the project with the live canvas state included.
    pub fn to_json(&mut self) -> Result<String, ProjectError> {
        self.sync_active_screen();
        self.project.to_json()
    }
}
