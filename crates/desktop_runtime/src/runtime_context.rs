//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{shell_elapsed_ms, unix_time_ms_now, HostServices};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    config::ShellConfig,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the shell.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Shell configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::new(config.unwrap_or_default()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let rng = store_value(SmallRng::seed_from_u64(unix_time_ms_now()));

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();
        let mut new_effects = Vec::new();

        rng.update_value(|rng| {
            // Catch the virtual clock up first so anything the action schedules is relative to
            // real elapsed time.
            if !matches!(action, DesktopAction::Tick { .. }) {
                let tick = DesktopAction::Tick {
                    now_ms: shell_elapsed_ms(),
                };
                match reduce_desktop(&mut desktop, &mut ui, rng, tick) {
                    Ok(emitted) => new_effects.extend(emitted),
                    Err(err) => logging::warn!("desktop reducer error: {err}"),
                }
            }
            match reduce_desktop(&mut desktop, &mut ui, rng, action) {
                Ok(emitted) => new_effects.extend(emitted),
                Err(err) => logging::warn!("desktop reducer error: {err}"),
            }
        });

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    host.get_value().install_boot(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
