use super::*;
use crate::{
    model::{TerminalLine, TerminalLineKind},
    terminal::prompt,
};

fn line_class(kind: TerminalLineKind) -> &'static str {
    match kind {
        TerminalLineKind::Output => "terminal-line",
        TerminalLineKind::Command => "terminal-line command",
        TerminalLineKind::Error => "terminal-line error",
    }
}

#[component]
pub(super) fn DesktopTerminal() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let shell = create_memo(move |_| project_shell(&state.get()));
    let style = move || {
        let offset = state.with(|s| s.terminal.offset);
        let display = render::layer_display(shell.get().terminal)
            .map(|value| format!("display:{value};"))
            .unwrap_or_default();
        format!("transform:translate({}px, {}px);{display}", offset.x, offset.y)
    };
    let begin_move =
        move |ev: web_sys::PointerEvent| begin_drag(runtime, DragTarget::Terminal, &ev);

    view! {
        <section
            class="desktop-terminal"
            style=style
            aria-label="Terminal"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <header class="terminal-header" on:pointerdown=begin_move>
                <span class="terminal-title">"terminal"</span>
            </header>
            <div class="terminal-body">
                {move || {
                    state.with(|s| {
                        s.terminal
                            .lines
                            .iter()
                            .filter(|line| line.revealed > 0 || line.text.is_empty())
                            .map(|line: &TerminalLine| {
                                view! { <div class=line_class(line.kind)>{line.revealed_text()}</div> }
                            })
                            .collect_view()
                    })
                }}
                <div class="terminal-input-row">
                    <span class="terminal-prompt">{move || state.with(prompt)}</span>
                    <input
                        id=render::TERMINAL_INPUT_DOM_ID
                        class="terminal-input"
                        type="text"
                        spellcheck="false"
                        autocomplete="off"
                        prop:value=move || state.with(|s| s.terminal.input.clone())
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetTerminalInput {
                                value: event_target_value(&ev),
                            });
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                runtime.dispatch_action(DesktopAction::SubmitTerminal);
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
