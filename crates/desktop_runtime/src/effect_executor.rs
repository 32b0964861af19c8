//! Drains reducer-emitted runtime effects in emission order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor on the runtime effect queue.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Take the batch before running it; effects that dispatch again enqueue a fresh batch.
        let batch = runtime.effects.try_update(std::mem::take).unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
