//! Pure projections from [`DesktopState`] to what the DOM should show.
//!
//! Components read these views instead of interpreting state themselves, so every visual rule
//! (classes, inline styles, which layers are visible) is testable without a browser.

use crate::model::{
    AnimationKind, AppId, BootOverlay, DesktopState, ResponsiveMode, WindowLifecycle,
    WindowRecord, WindowTransform,
};

pub fn window_dom_id(app_id: &AppId) -> String {
    format!("window-{app_id}")
}

pub fn dock_icon_dom_id(app_id: &AppId) -> String {
    format!("dock-icon-{app_id}")
}

pub const BOOT_SURFACE_DOM_ID: &str = "boot-screen";
pub const LOCK_INPUT_DOM_ID: &str = "lock-credential";
pub const TERMINAL_INPUT_DOM_ID: &str = "desktop-terminal-input";

pub fn transform_css(transform: WindowTransform) -> String {
    match transform {
        WindowTransform::Centered => "translate(-50%, -50%)".to_string(),
        WindowTransform::Identity => "none".to_string(),
        WindowTransform::DockFlight {
            dx,
            dy,
            scale_pct,
            centered,
        } => {
            let scale = format!("{}.{:02}", scale_pct / 100, scale_pct % 100);
            if centered {
                format!("translate(-50%, -50%) translate({dx}px, {dy}px) scale({scale})")
            } else {
                format!("translate({dx}px, {dy}px) scale({scale})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub dom_id: String,
    pub visible: bool,
    pub class: String,
    pub style: String,
}

pub fn project_window(record: &WindowRecord) -> WindowView {
    let mut class = String::from("app-window");
    if record.lifecycle.is_active() {
        class.push_str(" active");
    }
    if record.lifecycle == WindowLifecycle::Maximized {
        class.push_str(" maximized");
    }
    match record.animation_kind() {
        Some(AnimationKind::BounceIn) => class.push_str(" bounce-in"),
        Some(AnimationKind::BounceOut) => class.push_str(" bounce-out"),
        Some(AnimationKind::MinimizeToDock) => class.push_str(" minimizing"),
        None => {}
    }

    let g = record.geometry;
    let mut style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;transform:{};opacity:{};",
        g.left,
        g.top,
        g.width,
        g.height,
        transform_css(record.transform),
        if record.faded { "0" } else { "1" },
    );
    if !record.visible {
        style.push_str("display:none;");
    }

    WindowView {
        dom_id: window_dom_id(&record.app_id),
        visible: record.visible,
        class,
        style,
    }
}

/// Which shell layers are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellView {
    pub boot_overlay: bool,
    pub boot_fading: bool,
    pub lock_screen: bool,
    pub lock_error: bool,
    pub desktop_icons: bool,
    pub dock: bool,
    pub window_layer: bool,
    pub terminal: bool,
    pub mobile_list: bool,
    pub mobile_page: Option<AppId>,
    pub help_overlay: bool,
}

/// Inline `display` value for a shell layer: `none` when hidden, otherwise left to the page.
pub fn layer_display(visible: bool) -> Option<&'static str> {
    (!visible).then_some("none")
}

pub fn project_shell(state: &DesktopState) -> ShellView {
    let boot_overlay = matches!(
        state.boot.overlay,
        BootOverlay::Visible | BootOverlay::Fading
    );
    let locked = state.lock.locked;
    let desktop = state.mode == ResponsiveMode::Desktop && !locked;
    let mobile = state.mode == ResponsiveMode::Mobile && !locked;

    ShellView {
        boot_overlay,
        boot_fading: state.boot.overlay == BootOverlay::Fading,
        lock_screen: locked,
        lock_error: locked && state.lock.error_visible,
        desktop_icons: desktop,
        dock: desktop,
        window_layer: desktop,
        terminal: desktop,
        mobile_list: mobile && state.mobile_page.is_none(),
        mobile_page: state.mobile_page.clone().filter(|_| mobile),
        help_overlay: state.help_visible && desktop && state.boot.completed,
    }
}
