//! Window lifecycle transitions used by the desktop reducer.
//!
//! Every function validates its target before touching state, so an `Err` return always means
//! nothing changed. Animated transitions attach a [`WindowAnimation`] whose task id acts as a
//! continuation token: replacing or clearing the animation turns the pending continuation into a
//! no-op.

use crate::{
    model::{
        AnimationKind, AppId, DesktopState, ScreenPoint, WindowAnimation, WindowGeometry,
        WindowLifecycle, WindowRecord, WindowTransform,
    },
    reducer::ReducerError,
    scheduler::{ScheduledAction, TaskId},
};

/// Rebuilds window records from the registry, keeping records whose app id survives.
pub fn sync_windows_with_registry(state: &mut DesktopState) {
    let geometry = state.default_geometry();
    let mut previous = std::mem::take(&mut state.windows);
    state.windows = state
        .registry
        .apps()
        .iter()
        .map(|app| {
            previous
                .iter()
                .position(|w| w.app_id == app.id)
                .map(|index| previous.swap_remove(index))
                .unwrap_or_else(|| WindowRecord::closed(app.id.clone(), geometry))
        })
        .collect();
}

/// Opens `app_id`, closing every other window. A minimized window is restored instead.
pub fn open_window(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    let lifecycle = lifecycle_of(state, app_id)?;
    if lifecycle == WindowLifecycle::Minimized {
        return restore_window(state, app_id);
    }

    force_close_others(state, app_id);
    let task = state.scheduler.schedule(
        state.config.bounce_in_ms,
        ScheduledAction::FinishEntrance {
            app_id: app_id.clone(),
        },
    );
    if let Some(window) = state.window_mut(app_id) {
        if window.lifecycle == WindowLifecycle::Maximized {
            window.transform = WindowTransform::Identity;
        } else {
            window.lifecycle = WindowLifecycle::Open;
            window.transform = WindowTransform::Centered;
        }
        window.visible = true;
        window.faded = false;
        window.animation = Some(WindowAnimation {
            kind: AnimationKind::BounceIn,
            task,
        });
    }
    Ok(())
}

/// Starts the exit animation; the window becomes closed when it finishes.
pub fn close_window(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    let window = find_window(state, app_id)?;
    if !window.visible {
        if let Some(window) = state.window_mut(app_id) {
            force_close(window);
        }
        return Ok(());
    }
    if window.animation_kind() == Some(AnimationKind::BounceOut) {
        return Ok(());
    }

    let task = state.scheduler.schedule(
        state.config.bounce_out_ms,
        ScheduledAction::FinishClose {
            app_id: app_id.clone(),
        },
    );
    if let Some(window) = state.window_mut(app_id) {
        window.animation = Some(WindowAnimation {
            kind: AnimationKind::BounceOut,
            task,
        });
    }
    Ok(())
}

/// Starts the flight toward `dock_target`; the window becomes minimized when it lands.
///
/// Only open or maximized windows that are not already leaving can be minimized; anything else
/// is a no-op. An unresolved dock target is an error and leaves the window untouched.
pub fn minimize_window(
    state: &mut DesktopState,
    app_id: &AppId,
    dock_target: Option<ScreenPoint>,
) -> Result<(), ReducerError> {
    let window = find_window(state, app_id)?;
    let leaving = matches!(
        window.animation_kind(),
        Some(AnimationKind::BounceOut | AnimationKind::MinimizeToDock)
    );
    if !window.lifecycle.is_active() || leaving {
        return Ok(());
    }
    let target = dock_target.ok_or_else(|| ReducerError::DockTargetUnresolved(app_id.clone()))?;

    let center = window.screen_center();
    let transform = WindowTransform::DockFlight {
        dx: target.x - center.x,
        dy: target.y - center.y,
        scale_pct: state.config.dock_flight_scale_pct,
        centered: window.transform == WindowTransform::Centered,
    };
    let task = state.scheduler.schedule(
        state.config.minimize_ms,
        ScheduledAction::FinishMinimize {
            app_id: app_id.clone(),
        },
    );
    if let Some(window) = state.window_mut(app_id) {
        window.transform = transform;
        window.faded = true;
        window.animation = Some(WindowAnimation {
            kind: AnimationKind::MinimizeToDock,
            task,
        });
    }
    Ok(())
}

/// Brings a minimized window back. No-op for any other lifecycle.
pub fn restore_window(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    if lifecycle_of(state, app_id)? != WindowLifecycle::Minimized {
        return Ok(());
    }

    force_close_others(state, app_id);
    let task = state.scheduler.schedule(
        state.config.bounce_in_ms,
        ScheduledAction::FinishEntrance {
            app_id: app_id.clone(),
        },
    );
    if let Some(window) = state.window_mut(app_id) {
        window.lifecycle = WindowLifecycle::Open;
        window.transform = WindowTransform::Centered;
        window.visible = true;
        window.faded = false;
        window.animation = Some(WindowAnimation {
            kind: AnimationKind::BounceIn,
            task,
        });
    }
    Ok(())
}

/// Maximizes an open window or returns a maximized one to its saved geometry.
pub fn toggle_maximize(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    let viewport = state.viewport;
    let window = state
        .window_mut(app_id)
        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
    let leaving = matches!(
        window.animation_kind(),
        Some(AnimationKind::BounceOut | AnimationKind::MinimizeToDock)
    );
    if leaving {
        return Ok(());
    }

    match window.lifecycle {
        WindowLifecycle::Open => {
            window.saved_geometry = Some(window.geometry);
            window.geometry = WindowGeometry::filling(viewport);
            window.transform = WindowTransform::Identity;
            window.lifecycle = WindowLifecycle::Maximized;
        }
        WindowLifecycle::Maximized => unmaximize(window),
        WindowLifecycle::Closed | WindowLifecycle::Minimized => {}
    }
    Ok(())
}

/// Dock click: minimized windows are restored, everything else is opened.
pub fn activate_dock_item(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    match lifecycle_of(state, app_id)? {
        WindowLifecycle::Minimized => restore_window(state, app_id),
        _ => open_window(state, app_id),
    }
}

/// Hides every window immediately.
pub fn close_all_windows(state: &mut DesktopState) {
    for window in &mut state.windows {
        force_close(window);
    }
}

/// Re-fits maximized windows after the viewport changed size.
pub fn refit_maximized(state: &mut DesktopState) {
    let viewport = state.viewport;
    for window in &mut state.windows {
        if window.lifecycle == WindowLifecycle::Maximized {
            window.geometry = WindowGeometry::filling(viewport);
        }
    }
}

/// Applies a finished animation continuation. Stale tokens are ignored.
pub fn finish_animation(state: &mut DesktopState, task: TaskId, action: ScheduledAction) {
    let (app_id, expected) = match &action {
        ScheduledAction::FinishEntrance { app_id } => (app_id, AnimationKind::BounceIn),
        ScheduledAction::FinishClose { app_id } => (app_id, AnimationKind::BounceOut),
        ScheduledAction::FinishMinimize { app_id } => (app_id, AnimationKind::MinimizeToDock),
        _ => return,
    };
    let Some(window) = state.window_mut(app_id) else {
        return;
    };
    let current = Some(WindowAnimation {
        kind: expected,
        task,
    });
    if window.animation != current {
        return;
    }

    match expected {
        AnimationKind::BounceIn => window.animation = None,
        AnimationKind::BounceOut => force_close(window),
        AnimationKind::MinimizeToDock => {
            if window.lifecycle == WindowLifecycle::Maximized {
                unmaximize(window);
            }
            window.lifecycle = WindowLifecycle::Minimized;
            window.visible = false;
            window.transform = WindowTransform::Centered;
            window.faded = false;
            window.animation = None;
        }
    }
}

/// Moves an open window so its placement anchor sits at `anchor`.
pub fn move_window_to(state: &mut DesktopState, app_id: &AppId, anchor: ScreenPoint) {
    let Some(window) = state.window_mut(app_id) else {
        return;
    };
    let leaving = matches!(
        window.animation_kind(),
        Some(AnimationKind::BounceOut | AnimationKind::MinimizeToDock)
    );
    if window.lifecycle == WindowLifecycle::Open && !leaving {
        window.geometry.left = anchor.x;
        window.geometry.top = anchor.y;
    }
}

fn find_window<'a>(
    state: &'a DesktopState,
    app_id: &AppId,
) -> Result<&'a WindowRecord, ReducerError> {
    state
        .window(app_id)
        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))
}

fn lifecycle_of(state: &DesktopState, app_id: &AppId) -> Result<WindowLifecycle, ReducerError> {
    find_window(state, app_id).map(|window| window.lifecycle)
}

fn force_close_others(state: &mut DesktopState, keep: &AppId) {
    for window in state.windows.iter_mut().filter(|w| w.app_id != *keep) {
        force_close(window);
    }
}

fn force_close(window: &mut WindowRecord) {
    if window.lifecycle == WindowLifecycle::Maximized {
        unmaximize(window);
    }
    window.lifecycle = WindowLifecycle::Closed;
    window.visible = false;
    window.faded = false;
    window.transform = WindowTransform::Centered;
    window.animation = None;
}

fn unmaximize(window: &mut WindowRecord) {
    if let Some(saved) = window.saved_geometry.take() {
        window.geometry = saved;
    }
    window.transform = WindowTransform::Centered;
    window.lifecycle = WindowLifecycle::Open;
}
