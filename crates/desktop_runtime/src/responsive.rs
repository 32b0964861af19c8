//! Desktop/mobile layout selection.

use crate::model::{AppId, DesktopState, ResponsiveMode, ViewportSize};
use crate::reducer::ReducerError;

/// Widths at or below `breakpoint_px` use the mobile layout.
pub fn mode_for_width(width: i32, breakpoint_px: i32) -> ResponsiveMode {
    if width <= breakpoint_px {
        ResponsiveMode::Mobile
    } else {
        ResponsiveMode::Desktop
    }
}

/// Records a new viewport and recomputes the layout mode.
pub fn apply_viewport(state: &mut DesktopState, viewport: ViewportSize) {
    state.viewport = viewport;
    state.mode = mode_for_width(viewport.width, state.config.mobile_breakpoint_px);
    if state.mode == ResponsiveMode::Desktop {
        state.mobile_page = None;
    }
}

/// Opens the full-page detail view for `app_id`. Ignored outside the mobile layout.
pub fn open_mobile_page(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    if !state.registry.contains(app_id) {
        return Err(ReducerError::UnknownApp(app_id.clone()));
    }
    if state.mode == ResponsiveMode::Mobile {
        state.mobile_page = Some(app_id.clone());
    }
    Ok(())
}

pub fn close_mobile_page(state: &mut DesktopState) {
    state.mobile_page = None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::Application, registry::AppRegistry};

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(mode_for_width(767, 767), ResponsiveMode::Mobile);
        assert_eq!(mode_for_width(768, 767), ResponsiveMode::Desktop);
        assert_eq!(mode_for_width(0, 767), ResponsiveMode::Mobile);
    }

    #[test]
    fn growing_past_the_breakpoint_drops_the_mobile_page() {
        let mut state = DesktopState::default();
        state.registry = AppRegistry::new(vec![Application {
            id: AppId::from("about"),
            title: "About".to_string(),
            content: String::new(),
            subtitle: None,
        }]);

        apply_viewport(
            &mut state,
            ViewportSize {
                width: 390,
                height: 844,
            },
        );
        assert_eq!(state.mode, ResponsiveMode::Mobile);
        open_mobile_page(&mut state, &AppId::from("about")).unwrap();
        assert_eq!(state.mobile_page, Some(AppId::from("about")));

        apply_viewport(
            &mut state,
            ViewportSize {
                width: 1024,
                height: 768,
            },
        );
        assert_eq!(state.mode, ResponsiveMode::Desktop);
        assert_eq!(state.mobile_page, None);
    }

    #[test]
    fn mobile_pages_need_a_known_app_and_the_mobile_layout() {
        let mut state = DesktopState::default();
        assert_eq!(
            open_mobile_page(&mut state, &AppId::from("ghost")),
            Err(ReducerError::UnknownApp(AppId::from("ghost")))
        );

        state.registry = AppRegistry::new(vec![Application {
            id: AppId::from("about"),
            title: "About".to_string(),
            content: String::new(),
            subtitle: None,
        }]);
        open_mobile_page(&mut state, &AppId::from("about")).unwrap();
        assert_eq!(state.mobile_page, None);
    }
}
