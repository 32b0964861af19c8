//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{ContentSource, SessionFlagStore};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Off-browser composition with in-memory adapters.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the shell runtime.
///
/// Environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, so the runtime never names browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Session-scoped flag storage.
    pub session: Rc<dyn SessionFlagStore>,
    /// Source of the app registry document.
    pub content: Rc<dyn ContentSource>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}
