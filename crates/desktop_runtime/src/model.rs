use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::ShellConfig,
    registry::AppRegistry,
    scheduler::{Scheduler, TaskId},
};

pub const MIN_WINDOW_WIDTH: i32 = 280;
pub const MIN_WINDOW_HEIGHT: i32 = 180;
/// Gap kept between a default-sized window and the viewport edge.
pub const WINDOW_MARGIN: i32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One registry entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: AppId,
    pub title: String,
    /// Pre-rendered HTML body; opaque to the shell.
    pub content: String,
    pub subtitle: Option<String>,
}

impl Application {
    pub fn glyph(&self) -> &'static str {
        crate::icons::glyph_for(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowLifecycle {
    Closed,
    Open,
    Minimized,
    Maximized,
}

impl WindowLifecycle {
    /// Open and maximized windows count against the single-active-window policy.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Maximized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// On-screen placement in CSS pixels.
///
/// Under [`WindowTransform::Centered`] `left`/`top` name the window center; under
/// [`WindowTransform::Identity`] they name the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    /// Default placement: centered in `viewport`, shrunk to fit with a margin.
    pub fn centered_in(viewport: ViewportSize, width: i32, height: i32) -> Self {
        let max_w = (viewport.width - 2 * WINDOW_MARGIN).max(MIN_WINDOW_WIDTH);
        let max_h = (viewport.height - 2 * WINDOW_MARGIN).max(MIN_WINDOW_HEIGHT);
        Self {
            left: viewport.width / 2,
            top: viewport.height / 2,
            width: width.clamp(MIN_WINDOW_WIDTH, max_w),
            height: height.clamp(MIN_WINDOW_HEIGHT, max_h),
        }
    }

    pub fn filling(viewport: ViewportSize) -> Self {
        Self {
            left: 0,
            top: 0,
            width: viewport.width,
            height: viewport.height,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowTransform {
    /// `translate(-50%, -50%)`: the default placement convention.
    Centered,
    /// No transform; used while maximized.
    Identity,
    /// Minimize flight toward the dock icon.
    DockFlight {
        dx: i32,
        dy: i32,
        scale_pct: u32,
        /// Whether the flight starts from the centered convention.
        centered: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    BounceIn,
    BounceOut,
    MinimizeToDock,
}

/// Animation currently attached to a window, tied to the scheduler task that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowAnimation {
    pub kind: AnimationKind,
    pub task: TaskId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub lifecycle: WindowLifecycle,
    pub geometry: WindowGeometry,
    pub saved_geometry: Option<WindowGeometry>,
    pub transform: WindowTransform,
    pub visible: bool,
    /// Opacity is driven to zero during the dock flight.
    pub faded: bool,
    pub animation: Option<WindowAnimation>,
}

impl WindowRecord {
    pub fn closed(app_id: AppId, geometry: WindowGeometry) -> Self {
        Self {
            app_id,
            lifecycle: WindowLifecycle::Closed,
            geometry,
            saved_geometry: None,
            transform: WindowTransform::Centered,
            visible: false,
            faded: false,
            animation: None,
        }
    }

    pub fn screen_center(&self) -> ScreenPoint {
        let g = self.geometry;
        match self.transform {
            WindowTransform::Centered => ScreenPoint {
                x: g.left,
                y: g.top,
            },
            WindowTransform::Identity => ScreenPoint {
                x: g.left + g.width / 2,
                y: g.top + g.height / 2,
            },
            WindowTransform::DockFlight {
                dx, dy, centered, ..
            } => {
                let (x, y) = if centered {
                    (g.left, g.top)
                } else {
                    (g.left + g.width / 2, g.top + g.height / 2)
                };
                ScreenPoint {
                    x: x + dx,
                    y: y + dy,
                }
            }
        }
    }

    pub fn animation_kind(&self) -> Option<AnimationKind> {
        self.animation.map(|animation| animation.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootPhase {
    NotStarted,
    Running { stage: usize },
    Closing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootOverlay {
    Visible,
    Fading,
    Removed,
    /// The page never rendered a boot surface.
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootTag {
    Stage,
    Ok,
    Info,
    Fail,
    Closing,
}

impl BootTag {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Ok => Some("OK"),
            Self::Info => Some("INFO"),
            Self::Fail => Some("FAIL"),
            Self::Stage | Self::Closing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootLine {
    pub tag: BootTag,
    pub text: String,
    /// Number of characters of `text` revealed so far.
    pub revealed: usize,
}

impl BootLine {
    pub fn revealed_text(&self) -> String {
        self.text.chars().take(self.revealed).collect()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootState {
    pub phase: BootPhase,
    pub overlay: BootOverlay,
    pub lines: Vec<BootLine>,
    /// Set exactly once; never cleared.
    pub completed: bool,
}

impl Default for BootState {
    fn default() -> Self {
        Self {
            phase: BootPhase::NotStarted,
            overlay: BootOverlay::Visible,
            lines: Vec::new(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockState {
    pub locked: bool,
    /// Candidate credential; cleared on every attempt.
    pub credential_buffer: String,
    pub error_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponsiveMode {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalLineKind {
    Output,
    Command,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: TerminalLineKind,
    pub text: String,
    pub revealed: usize,
}

impl TerminalLine {
    pub fn full(kind: TerminalLineKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let revealed = text.chars().count();
        Self {
            kind,
            text,
            revealed,
        }
    }

    pub fn revealed_text(&self) -> String {
        self.text.chars().take(self.revealed).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerminalState {
    pub lines: Vec<TerminalLine>,
    pub input: String,
    /// Index of the greeting line currently being typed.
    pub greeting_line: Option<usize>,
    /// Drag offset of the terminal panel from its docked placement.
    pub offset: ScreenPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub config: ShellConfig,
    pub registry: AppRegistry,
    /// One record per registry entry, in registry order.
    pub windows: Vec<WindowRecord>,
    pub viewport: ViewportSize,
    pub mode: ResponsiveMode,
    /// App whose full-page detail view is open in the mobile layout.
    pub mobile_page: Option<AppId>,
    pub boot: BootState,
    pub lock: LockState,
    pub terminal: TerminalState,
    pub help_visible: bool,
    pub scheduler: Scheduler,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl DesktopState {
    pub fn new(config: ShellConfig) -> Self {
        let viewport = ViewportSize::default();
        let mode = crate::responsive::mode_for_width(viewport.width, config.mobile_breakpoint_px);
        Self {
            config,
            registry: AppRegistry::default(),
            windows: Vec::new(),
            viewport,
            mode,
            mobile_page: None,
            boot: BootState::default(),
            lock: LockState::default(),
            terminal: TerminalState::default(),
            help_visible: false,
            scheduler: Scheduler::default(),
        }
    }

    pub fn window(&self, app_id: &AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == *app_id)
    }

    pub fn window_mut(&mut self, app_id: &AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.app_id == *app_id)
    }

    /// The open or maximized window, if any.
    pub fn active_window_id(&self) -> Option<&AppId> {
        self.windows
            .iter()
            .find(|w| w.lifecycle.is_active())
            .map(|w| &w.app_id)
    }

    pub fn default_geometry(&self) -> WindowGeometry {
        WindowGeometry::centered_in(
            self.viewport,
            self.config.default_window_width,
            self.config.default_window_height,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Window(AppId),
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub target: DragTarget,
    pub pointer_start: ScreenPoint,
    /// Position (window `left`/`top`, or terminal offset) at drag start.
    pub origin: ScreenPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
