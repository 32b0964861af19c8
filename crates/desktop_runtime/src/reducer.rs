//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use rand::Rng;
use thiserror::Error;

use crate::{
    boot,
    lock,
    model::{
        AppId, DesktopState, DragSession, DragTarget, InteractionState, ScreenPoint, ViewportSize,
        WindowLifecycle,
    },
    registry::AppRegistry,
    responsive,
    scheduler::{ScheduledAction, TaskId},
    terminal, window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Replace the app registry; window records are rebuilt to match it.
    RegistryLoaded { registry: AppRegistry },
    /// The browser viewport changed size (also sent once at startup).
    ViewportResized { viewport: ViewportSize },
    /// Start the boot log. `surface_present` reports whether the page rendered a boot overlay.
    StartBoot { surface_present: bool },
    /// Advance virtual time and run every continuation due by `now_ms`.
    Tick { now_ms: u64 },
    OpenWindow { app_id: AppId },
    CloseWindow { app_id: AppId },
    /// Minimize toward the dock icon center; `None` when the icon could not be located.
    MinimizeWindow {
        app_id: AppId,
        dock_target: Option<ScreenPoint>,
    },
    RestoreWindow { app_id: AppId },
    ToggleMaximize { app_id: AppId },
    /// Click on the desktop outside any window, dock item, or icon.
    CloseAllWindows,
    /// Click on a dock item or desktop icon.
    ActivateDockItem { app_id: AppId },
    /// Begin dragging a window or the terminal by its header.
    BeginMove {
        target: DragTarget,
        pointer: ScreenPoint,
    },
    /// Update an in-progress drag.
    UpdateMove { pointer: ScreenPoint },
    /// End the active drag.
    EndMove,
    Lock,
    SetCredentialInput { value: String },
    SubmitCredential,
    OpenMobilePage { app_id: AppId },
    CloseMobilePage,
    SetTerminalInput { value: String },
    SubmitTerminal,
    /// Apply the session flag read at startup.
    HydrateHelpFlag { dismissed: bool },
    DismissHelp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Arm a host timer that dispatches `Tick` at `due_ms` on the shell clock. Re-emitted after
    /// every `Tick` while work is pending; the host skips it when an earlier timer is armed.
    ArmTimer { due_ms: u64 },
    /// Boot finished; wire post-boot features. Emitted exactly once per session.
    BootCompleted,
    /// Record the help overlay dismissal in session storage.
    PersistHelpDismissed,
    /// Move keyboard focus into the lock screen credential input.
    FocusLockInput,
    /// Move keyboard focus into the desktop terminal input.
    FocusTerminalInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply. State is untouched when one is returned.
pub enum ReducerError {
    /// The app id is not in the registry.
    #[error("unknown application `{0}`")]
    UnknownApp(AppId),
    /// The dock icon used as the minimize target could not be located.
    #[error("dock target for `{0}` could not be resolved")]
    DockTargetUnresolved(AppId),
    /// The boot sequence has not completed yet.
    #[error("shell is still booting")]
    ShellNotReady,
    /// The lock screen is up.
    #[error("shell is locked")]
    ShellLocked,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Randomness (boot pacing, decorative lines, greeting pacing) is drawn from `rng`, so a seeded
/// generator makes the whole shell deterministic.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references an unknown app, a minimize target could
/// not be resolved, or the shell is not accepting window operations yet (booting or locked).
pub fn reduce_desktop<R: Rng + ?Sized>(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    rng: &mut R,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let previous_due = state.scheduler.next_due();
    let mut effects = Vec::new();
    let mut rearm = false;

    match action {
        DesktopAction::RegistryLoaded { registry } => {
            state.registry = registry;
            window_manager::sync_windows_with_registry(state);
            if let Some(app_id) = state.mobile_page.clone() {
                if !state.registry.contains(&app_id) {
                    state.mobile_page = None;
                }
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            responsive::apply_viewport(state, viewport);
            window_manager::refit_maximized(state);
        }
        DesktopAction::StartBoot { surface_present } => {
            boot::start_boot(state, rng, surface_present, &mut effects);
        }
        DesktopAction::Tick { now_ms } => {
            while let Some((task, scheduled)) = state.scheduler.begin_next_due(now_ms) {
                apply_scheduled(state, rng, task, scheduled, &mut effects);
                state.scheduler.finish(task);
            }
            state.scheduler.settle(now_ms);
            // A host timer can fire a little early; the pending task still needs a timer.
            rearm = true;
        }
        DesktopAction::OpenWindow { app_id } => {
            ensure_interactive(state)?;
            window_manager::open_window(state, &app_id)?;
        }
        DesktopAction::CloseWindow { app_id } => {
            ensure_interactive(state)?;
            window_manager::close_window(state, &app_id)?;
        }
        DesktopAction::MinimizeWindow {
            app_id,
            dock_target,
        } => {
            ensure_interactive(state)?;
            window_manager::minimize_window(state, &app_id, dock_target)?;
        }
        DesktopAction::RestoreWindow { app_id } => {
            ensure_interactive(state)?;
            window_manager::restore_window(state, &app_id)?;
        }
        DesktopAction::ToggleMaximize { app_id } => {
            ensure_interactive(state)?;
            window_manager::toggle_maximize(state, &app_id)?;
        }
        DesktopAction::CloseAllWindows => {
            ensure_interactive(state)?;
            window_manager::close_all_windows(state);
        }
        DesktopAction::ActivateDockItem { app_id } => {
            ensure_interactive(state)?;
            window_manager::activate_dock_item(state, &app_id)?;
        }
        DesktopAction::BeginMove { target, pointer } => {
            ensure_interactive(state)?;
            let origin = match &target {
                DragTarget::Window(app_id) => {
                    let window = state
                        .window(app_id)
                        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
                    if window.lifecycle != WindowLifecycle::Open {
                        return Ok(effects);
                    }
                    ScreenPoint {
                        x: window.geometry.left,
                        y: window.geometry.top,
                    }
                }
                DragTarget::Terminal => state.terminal.offset,
            };
            interaction.dragging = Some(DragSession {
                target,
                pointer_start: pointer,
                origin,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let anchor = ScreenPoint {
                    x: session.origin.x + pointer.x - session.pointer_start.x,
                    y: session.origin.y + pointer.y - session.pointer_start.y,
                };
                match &session.target {
                    DragTarget::Window(app_id) => {
                        window_manager::move_window_to(state, app_id, anchor)
                    }
                    DragTarget::Terminal => state.terminal.offset = anchor,
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::Lock => {
            if !state.boot.completed {
                return Err(ReducerError::ShellNotReady);
            }
            interaction.dragging = None;
            lock::lock(state);
            effects.push(RuntimeEffect::FocusLockInput);
        }
        DesktopAction::SetCredentialInput { value } => {
            lock::set_credential_input(state, value);
        }
        DesktopAction::SubmitCredential => {
            if !lock::submit_credential(state) {
                effects.push(RuntimeEffect::FocusLockInput);
            }
        }
        DesktopAction::OpenMobilePage { app_id } => {
            if state.lock.locked {
                return Err(ReducerError::ShellLocked);
            }
            responsive::open_mobile_page(state, &app_id)?;
        }
        DesktopAction::CloseMobilePage => {
            responsive::close_mobile_page(state);
        }
        DesktopAction::SetTerminalInput { value } => {
            state.terminal.input = value;
        }
        DesktopAction::SubmitTerminal => {
            ensure_interactive(state)?;
            terminal::submit(state, &mut effects);
            if !state.lock.locked {
                effects.push(RuntimeEffect::FocusTerminalInput);
            }
        }
        DesktopAction::HydrateHelpFlag { dismissed } => {
            state.help_visible = !dismissed;
        }
        DesktopAction::DismissHelp => {
            if state.help_visible {
                state.help_visible = false;
                effects.push(RuntimeEffect::PersistHelpDismissed);
            }
        }
    }

    let next_due = state.scheduler.next_due();
    if rearm || next_due != previous_due {
        if let Some(due_ms) = next_due {
            effects.push(RuntimeEffect::ArmTimer { due_ms });
        }
    }
    Ok(effects)
}

fn apply_scheduled<R: Rng + ?Sized>(
    state: &mut DesktopState,
    rng: &mut R,
    task: TaskId,
    scheduled: ScheduledAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    match scheduled {
        ScheduledAction::FinishEntrance { .. }
        | ScheduledAction::FinishClose { .. }
        | ScheduledAction::FinishMinimize { .. } => {
            window_manager::finish_animation(state, task, scheduled);
        }
        ScheduledAction::GreetingTypeChar => terminal::type_greeting_char(state, rng),
        boot_step => boot::apply_boot_step(state, rng, boot_step, effects),
    }
}

fn ensure_interactive(state: &DesktopState) -> Result<(), ReducerError> {
    if !state.boot.completed {
        return Err(ReducerError::ShellNotReady);
    }
    if state.lock.locked {
        return Err(ReducerError::ShellLocked);
    }
    Ok(())
}
