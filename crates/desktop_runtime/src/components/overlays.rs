use super::*;
use crate::model::{BootLine, BootTag};

fn boot_line_class(tag: BootTag) -> &'static str {
    match tag {
        BootTag::Stage => "boot-line stage",
        BootTag::Ok => "boot-line ok",
        BootTag::Info => "boot-line info",
        BootTag::Fail => "boot-line fail",
        BootTag::Closing => "boot-line closing",
    }
}

fn boot_line_view(line: &BootLine) -> impl IntoView {
    let label = line.tag.label().map(|label| {
        view! { <span class="boot-tag">{format!("[{label:^6}]")}</span> }
    });
    view! {
        <div class=boot_line_class(line.tag)>
            {label}
            <span class="boot-text">{line.revealed_text()}</span>
        </div>
    }
}

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let enabled = state.with_untracked(|s| s.config.show_boot_log);
    let shell = create_memo(move |_| project_shell(&state.get()));

    view! {
        <Show when=move || enabled && shell.get().boot_overlay fallback=|| ()>
            <div
                id=render::BOOT_SURFACE_DOM_ID
                class="boot-screen"
                class:fading=move || shell.get().boot_fading
                aria-live="polite"
            >
                {move || {
                    state.with(|s| s.boot.lines.iter().map(boot_line_view).collect_view())
                }}
            </div>
        </Show>
    }
}

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell = create_memo(move |_| project_shell(&state.get()));

    view! {
        <div class="lock-screen" role="dialog" aria-label="Locked">
            <p class="lock-title">"Locked"</p>
            <input
                id=render::LOCK_INPUT_DOM_ID
                class="lock-input"
                type="password"
                placeholder="Password"
                autocomplete="off"
                prop:value=move || state.with(|s| s.lock.credential_buffer.clone())
                on:input=move |ev| {
                    runtime.dispatch_action(DesktopAction::SetCredentialInput {
                        value: event_target_value(&ev),
                    });
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        runtime.dispatch_action(DesktopAction::SubmitCredential);
                    }
                }
            />
            <Show when=move || shell.get().lock_error fallback=|| ()>
                <p class="lock-error" role="alert">"Incorrect password. Try again."</p>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn HelpOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="help-overlay" role="dialog" aria-label="Getting started">
            <p>"Click a desktop icon or dock item to open a window."</p>
            <p>"Drag windows by their title bar. Type `help` in the terminal for commands."</p>
            <button on:click=move |_| runtime.dispatch_action(DesktopAction::DismissHelp)>
                "Got it"
            </button>
        </div>
    }
}
