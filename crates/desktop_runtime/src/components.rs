//! Desktop shell UI composition and interaction surfaces.
//!
//! Components only read [`render`] projections and dispatch [`DesktopAction`] values; no visual
//! rule lives here.

mod dock;
mod mobile;
mod overlays;
mod terminal;
mod window;

use leptos::*;

use self::{
    dock::Dock,
    mobile::MobileView,
    overlays::{BootScreen, HelpOverlay, LockScreen},
    terminal::DesktopTerminal,
    window::AppWindow,
};

use crate::{
    model::{AppId, DragTarget, ScreenPoint},
    reducer::DesktopAction,
    render::{self, project_shell},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Root shell view. Place inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell = create_memo(move |_| project_shell(&state.get()));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.host.get_value().viewport_size(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:locked=move || shell.get().lock_screen
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <BootScreen />

            <div
                class="desktop-layer"
                style:display=move || {
                    let view = shell.get();
                    render::layer_display(view.desktop_icons || view.window_layer || view.terminal)
                }
            >
                <div
                    class="dismiss-layer"
                    on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseAllWindows)
                />
                <DesktopIcons />
                <div
                    class="window-layer"
                    style:display=move || render::layer_display(shell.get().window_layer)
                >
                    <For
                        each=move || state.with(|s| s.registry.apps().to_vec())
                        key=|app| app.id.clone()
                        let:app
                    >
                        <AppWindow app_id=app.id />
                    </For>
                </div>
                <DesktopTerminal />
            </div>

            <Dock />
            <MobileView />

            <Show when=move || shell.get().help_overlay fallback=|| ()>
                <HelpOverlay />
            </Show>
            <Show when=move || shell.get().lock_screen fallback=|| ()>
                <LockScreen />
            </Show>
        </div>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell = create_memo(move |_| project_shell(&state.get()));

    view! {
        <div
            class="desktop-icons"
            style:display=move || render::layer_display(shell.get().desktop_icons)
        >
            <For
                each=move || state.with(|s| s.registry.apps().to_vec())
                key=|app| app.id.clone()
                let:app
            >
                {{
                    let app_id = app.id.clone();
                    view! {
                        <button
                            class="desktop-icon"
                            on:mousedown=move |ev| ev.stop_propagation()
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ActivateDockItem {
                                    app_id: app_id.clone(),
                                });
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{app.glyph()}</span>
                            <span class="desktop-icon-label">{app.title.clone()}</span>
                        </button>
                    }
                }}
            </For>
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> ScreenPoint {
    ScreenPoint {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Starts a header drag for primary-button or primary-touch pointers.
fn begin_drag(runtime: DesktopRuntimeContext, target: DragTarget, ev: &web_sys::PointerEvent) {
    if ev.pointer_type() == "mouse" && ev.button() != 0 {
        return;
    }
    if ev.pointer_type() != "mouse" && !ev.is_primary() {
        return;
    }
    ev.prevent_default();
    ev.stop_propagation();
    runtime.dispatch_action(DesktopAction::BeginMove {
        target,
        pointer: pointer_from_pointer_event(ev),
    });
}

fn app_content(runtime: DesktopRuntimeContext, app_id: &AppId) -> Option<(String, String)> {
    runtime.state.with_untracked(|s| {
        s.registry
            .get(app_id)
            .map(|app| (app.title.clone(), app.content.clone()))
    })
}
