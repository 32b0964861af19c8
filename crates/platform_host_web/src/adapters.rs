use std::rc::Rc;

use platform_host::{
    ContentSource, HostServices, HostStrategy, MemorySessionStore, NoopContentSource,
    SessionFlagStore,
};

use crate::{WebContentSource, WebSessionStore};

/// Returns the host strategy for the active build target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete session backend behind [`SessionFlagStore`].
#[derive(Debug, Clone)]
pub enum SessionFlagStoreAdapter {
    /// Browser `sessionStorage`.
    Browser(WebSessionStore),
    /// Process-local memory.
    Headless(MemorySessionStore),
}

impl SessionFlagStore for SessionFlagStoreAdapter {
    fn load_flag(&self, key: &str) -> Option<bool> {
        match self {
            Self::Browser(store) => store.load_flag(key),
            Self::Headless(store) => store.load_flag(key),
        }
    }

    fn save_flag(&self, key: &str, value: bool) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_flag(key, value),
            Self::Headless(store) => store.save_flag(key, value),
        }
    }
}

/// Adapter enum that erases the concrete content backend behind [`ContentSource`].
#[derive(Debug, Clone, Copy)]
pub enum ContentSourceAdapter {
    /// Browser `fetch`.
    Browser(WebContentSource),
    /// No content available.
    Headless(NoopContentSource),
}

impl ContentSource for ContentSourceAdapter {
    fn fetch_text<'a>(
        &'a self,
        path: &'a str,
    ) -> platform_host::ContentSourceFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(source) => source.fetch_text(path),
            Self::Headless(source) => source.fetch_text(path),
        }
    }
}

/// Builds the session flag adapter for the selected host strategy.
pub fn session_flag_store() -> SessionFlagStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SessionFlagStoreAdapter::Browser(WebSessionStore),
        HostStrategy::Headless => {
            SessionFlagStoreAdapter::Headless(platform_host::session_store())
        }
    }
}

/// Builds the content source adapter for the selected host strategy.
pub fn content_source() -> ContentSourceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ContentSourceAdapter::Browser(WebContentSource),
        HostStrategy::Headless => ContentSourceAdapter::Headless(NoopContentSource),
    }
}

/// Assembles the host service bundle injected into the shell runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        session: Rc::new(session_flag_store()),
        content: Rc::new(content_source()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn off_browser_builds_select_headless_adapters() {
        assert_eq!(host_strategy_name(), "headless");
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        services
            .session
            .save_flag("probe", true)
            .expect("memory store accepts writes");
        assert_eq!(services.session.load_flag("probe"), Some(true));
    }
}
