use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::set_timeout;
use platform_host::shell_elapsed_ms;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{AppId, ScreenPoint, ViewportSize},
    reducer::DesktopAction,
    render,
    runtime_context::DesktopRuntimeContext,
};

/// Arms a browser timeout that reports elapsed shell time once `due_ms` is reached.
///
/// `armed` holds the due time of the outstanding timeout. A request that is not earlier than it
/// is dropped; the outstanding timeout's `Tick` re-arms for whatever is still pending.
pub(super) fn arm_timer(
    armed: Rc<Cell<Option<u64>>>,
    runtime: DesktopRuntimeContext,
    due_ms: u64,
) {
    if should_skip_arm(armed.get(), due_ms) {
        return;
    }
    armed.set(Some(due_ms));
    let delay = due_ms.saturating_sub(shell_elapsed_ms());
    set_timeout(
        move || {
            if armed.get() == Some(due_ms) {
                armed.set(None);
            }
            runtime.dispatch_action(DesktopAction::Tick {
                now_ms: shell_elapsed_ms(),
            })
        },
        Duration::from_millis(delay),
    );
}

fn should_skip_arm(armed: Option<u64>, due_ms: u64) -> bool {
    armed.is_some_and(|armed| armed <= due_ms)
}

/// Focuses an element on the next task so freshly rendered inputs exist before focus moves.
pub(super) fn focus_element_by_id(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

pub(super) fn viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = ViewportSize::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);
            return ViewportSize { width, height };
        }
    }

    ViewportSize::default()
}

pub(super) fn dock_icon_center(app_id: &AppId) -> Option<ScreenPoint> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(&render::dock_icon_dom_id(app_id))?;
        let rect = element.get_bounding_client_rect();
        return Some(ScreenPoint {
            x: (rect.left() + rect.width() / 2.0).round() as i32,
            y: (rect.top() + rect.height() / 2.0).round() as i32,
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = render::dock_icon_dom_id(app_id);
        None
    }
}

pub(super) fn boot_surface_present() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(render::BOOT_SURFACE_DOM_ID))
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_or_equal_requests_reuse_the_outstanding_timer() {
        assert!(!should_skip_arm(None, 40));
        assert!(should_skip_arm(Some(40), 40));
        assert!(should_skip_arm(Some(40), 90));
        assert!(!should_skip_arm(Some(40), 25));
    }
}
