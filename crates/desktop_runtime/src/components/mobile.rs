use super::*;

#[component]
pub(super) fn MobileView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell = create_memo(move |_| project_shell(&state.get()));

    view! {
        <div
            class="mobile-view"
            style:display=move || render::layer_display(shell.get().mobile_list)
        >
            <ul class="mobile-app-list">
                <For
                    each=move || state.with(|s| s.registry.apps().to_vec())
                    key=|app| app.id.clone()
                    let:app
                >
                    {{
                        let app_id = app.id.clone();
                        view! {
                            <li>
                                <button
                                    class="mobile-app-entry"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenMobilePage {
                                            app_id: app_id.clone(),
                                        });
                                    }
                                >
                                    <span class="mobile-app-glyph" aria-hidden="true">{app.glyph()}</span>
                                    <span class="mobile-app-title">{app.title.clone()}</span>
                                    {app.subtitle.clone().map(|subtitle| {
                                        view! { <span class="mobile-app-subtitle">{subtitle}</span> }
                                    })}
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
        {move || {
            shell.get().mobile_page.and_then(|app_id| app_content(runtime, &app_id)).map(|(title, content)| {
                view! {
                    <article class="mobile-page">
                        <header class="mobile-page-header">
                            <button
                                class="mobile-back"
                                aria-label="Back"
                                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseMobilePage)
                            >
                                "‹"
                            </button>
                            <h1>{title}</h1>
                        </header>
                        <div class="mobile-page-content" inner_html=content />
                    </article>
                }
            })
        }}
    }
}
