use super::*;
use crate::model::WindowLifecycle;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell = create_memo(move |_| project_shell(&state.get()));

    view! {
        <nav
            class="dock"
            style:display=move || render::layer_display(shell.get().dock)
            aria-label="Dock"
        >
            <For
                each=move || state.with(|s| s.registry.apps().to_vec())
                key=|app| app.id.clone()
                let:app
            >
                {{
                    let app_id = app.id.clone();
                    let status_id = app.id.clone();
                    let lifecycle = create_memo(move |_| {
                        state.with(|s| {
                            s.window(&status_id)
                                .map(|w| w.lifecycle)
                                .unwrap_or(WindowLifecycle::Closed)
                        })
                    });
                    view! {
                        <button
                            id=render::dock_icon_dom_id(&app.id)
                            class="dock-item"
                            class:running=move || lifecycle.get() != WindowLifecycle::Closed
                            class:minimized=move || lifecycle.get() == WindowLifecycle::Minimized
                            title=app.title.clone()
                            on:mousedown=move |ev| ev.stop_propagation()
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ActivateDockItem {
                                    app_id: app_id.clone(),
                                });
                            }
                        >
                            <span aria-hidden="true">{app.glyph()}</span>
                        </button>
                    }
                }}
            </For>
            <span class="dock-separator" aria-hidden="true" />
            <button
                class="dock-item dock-lock"
                title="Lock screen"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::Lock)
            >
                <span aria-hidden="true">"🔒"</span>
            </button>
        </nav>
    }
}
