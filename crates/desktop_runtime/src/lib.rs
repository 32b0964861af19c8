//! Desktop shell runtime for the portfolio site: window manager, boot log, lock screen,
//! responsive layout selection, and the desktop terminal, plus the Leptos components that render
//! them.
//!
//! State transitions are pure ([`reduce_desktop`]); browser interaction lives in the host layer
//! behind [`DesktopProvider`].

pub mod boot;
pub mod components;
pub mod config;
mod effect_executor;
mod host;
pub mod icons;
pub mod lock;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod render;
pub mod responsive;
mod runtime_context;
pub mod scheduler;
pub mod terminal;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{BootTimings, DelayRange, ShellConfig};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use registry::{load_registry, AppRegistry, RegistryError};
pub use render::{project_shell, project_window, ShellView, WindowView};
pub use scheduler::{ScheduledAction, Scheduler, TaskId, TaskPhase};
