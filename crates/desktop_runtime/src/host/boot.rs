use leptos::{logging, request_animation_frame, spawn_local, SignalGetUntracked};

use crate::{
    host::DesktopHostContext,
    reducer::DesktopAction,
    registry::load_registry,
    runtime_context::DesktopRuntimeContext,
};

/// Startup sequence:
/// 1. measure the viewport and apply the session help flag synchronously
/// 2. fetch the app registry in the background
/// 3. once the shell has rendered, start the boot log (or skip it when no surface exists)
pub(super) fn install_boot(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    runtime.dispatch_action(DesktopAction::ViewportResized {
        viewport: host.viewport_size(),
    });

    let config = runtime.state.get_untracked().config;
    let dismissed = host
        .session_store()
        .load_flag(&config.help_flag_key)
        .unwrap_or(false);
    runtime.dispatch_action(DesktopAction::HydrateHelpFlag { dismissed });

    let content = host.content_source();
    let registry_path = config.registry_path;
    spawn_local(async move {
        let (registry, errors) = load_registry(content.as_ref(), &registry_path).await;
        for err in &errors {
            logging::warn!("app registry: {err}");
        }
        logging::log!("app registry loaded with {} entries", registry.len());
        runtime.dispatch_action(DesktopAction::RegistryLoaded { registry });
    });

    request_animation_frame(move || {
        runtime.dispatch_action(DesktopAction::StartBoot {
            surface_present: host.boot_surface_present(),
        });
    });
}
