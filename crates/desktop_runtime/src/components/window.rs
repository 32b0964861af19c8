use super::*;
use crate::{model::WindowLifecycle, render::project_window};

#[component]
pub(super) fn AppWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let record = {
        let app_id = app_id.clone();
        create_memo(move |_| runtime.state.with(|s| s.window(&app_id).cloned()))
    };
    let view_state = create_memo(move |_| record.get().map(|w| project_window(&w)));
    let maximized = move || {
        record
            .get()
            .is_some_and(|w| w.lifecycle == WindowLifecycle::Maximized)
    };
    let (title, content) = app_content(runtime, &app_id).unwrap_or_default();

    let minimize = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            let dock_target = runtime.host.get_value().dock_icon_center(&app_id);
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                app_id: app_id.clone(),
                dock_target,
            });
        }
    };
    let toggle_maximize = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
            });
        }
    };
    let close = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::CloseWindow {
                app_id: app_id.clone(),
            });
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            begin_drag(runtime, DragTarget::Window(app_id.clone()), &ev);
        }
    };
    let header_double_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
            });
        }
    };

    view! {
        <section
            id=render::window_dom_id(&app_id)
            class=move || view_state.get().map(|v| v.class).unwrap_or_default()
            style=move || view_state.get().map(|v| v.style).unwrap_or_else(|| "display:none;".to_string())
            role="dialog"
            aria-label=title.clone()
            aria-hidden=move || (!view_state.get().is_some_and(|v| v.visible)).to_string()
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <header
                class="window-header"
                on:pointerdown=begin_move
                on:dblclick=header_double_click
            >
                <span class="window-title">{title.clone()}</span>
                <div class="window-controls">
                    <button
                        class="window-control minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    />
                    <button
                        class="window-control maximize"
                        aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=toggle_maximize
                    />
                    <button
                        class="window-control close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    />
                </div>
            </header>
            <div class="window-content" inner_html=content />
        </section>
    }
}
