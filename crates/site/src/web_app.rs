use desktop_runtime::{DesktopProvider, DesktopShell, ShellConfig};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A personal portfolio presented as a small desktop shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services() config=ShellConfig::default()>
            <DesktopShell />
        </DesktopProvider>
    }
}
