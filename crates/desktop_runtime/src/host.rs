//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer never touches the DOM. Everything it needs from the page (viewport size, dock icon
//! geometry, whether a boot surface was rendered) is measured here and passed in as action data.

mod boot;
mod effects;
mod host_ui;

use std::{cell::Cell, rc::Rc};

use platform_host::{ContentSource, HostServices, HostStrategy, SessionFlagStore};

use crate::{
    model::{AppId, ScreenPoint, ViewportSize},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    session: Rc<dyn SessionFlagStore>,
    content: Rc<dyn ContentSource>,
    host_strategy: HostStrategy,
    armed_timer: Rc<Cell<Option<u64>>>,
}

impl DesktopHostContext {
    /// Creates a host context from an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            session: services.session,
            content: services.content,
            host_strategy: services.host_strategy,
            armed_timer: Rc::new(Cell::new(None)),
        }
    }

    /// Returns the configured session flag store.
    pub fn session_store(&self) -> Rc<dyn SessionFlagStore> {
        self.session.clone()
    }

    /// Returns the configured registry content source.
    pub fn content_source(&self) -> Rc<dyn ContentSource> {
        self.content.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Installs startup wiring: viewport and help flag hydration, registry load, and boot start.
    pub fn install_boot(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Current browser viewport size.
    pub fn viewport_size(&self) -> ViewportSize {
        host_ui::viewport_size()
    }

    /// Screen center of the dock icon for `app_id`, if the icon is rendered.
    pub fn dock_icon_center(&self, app_id: &AppId) -> Option<ScreenPoint> {
        host_ui::dock_icon_center(app_id)
    }

    /// Whether the page rendered the boot log overlay.
    pub fn boot_surface_present(&self) -> bool {
        host_ui::boot_surface_present()
    }
}
