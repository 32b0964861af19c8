//! Runtime-effect dispatch for the desktop host boundary.

use leptos::{logging, SignalGetUntracked};

use crate::{
    host::{host_ui, DesktopHostContext},
    reducer::RuntimeEffect,
    render,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::ArmTimer { due_ms } => {
            host_ui::arm_timer(host.armed_timer.clone(), runtime, due_ms)
        }
        RuntimeEffect::BootCompleted => {
            logging::log!("desktop shell ready ({} host)", host.host_strategy_name());
        }
        RuntimeEffect::PersistHelpDismissed => persist_help_dismissed(host, runtime),
        RuntimeEffect::FocusLockInput => host_ui::focus_element_by_id(render::LOCK_INPUT_DOM_ID),
        RuntimeEffect::FocusTerminalInput => {
            host_ui::focus_element_by_id(render::TERMINAL_INPUT_DOM_ID)
        }
    }
}

fn persist_help_dismissed(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let key = runtime.state.get_untracked().config.help_flag_key;
    if let Err(err) = host.session_store().save_flag(&key, true) {
        logging::warn!("persist help flag `{key}` failed: {err}");
    }
}
