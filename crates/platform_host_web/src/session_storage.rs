//! `sessionStorage`-backed flag store implementation.

use platform_host::SessionFlagStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser session flag store backed by `window.sessionStorage`.
///
/// Flags are stored as the JSON literals `true`/`false`; anything else reads as unset.
pub struct WebSessionStore;

impl WebSessionStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }

    /// Loads the raw stored string for `key`.
    pub fn load_raw(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Saves a raw string for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when sessionStorage is unavailable or the write fails.
    pub fn save_raw(self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()
                .ok_or_else(|| "sessionStorage unavailable".to_string())?
                .set_item(key, raw)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

impl SessionFlagStore for WebSessionStore {
    fn load_flag(&self, key: &str) -> Option<bool> {
        self.load_raw(key)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
    }

    fn save_flag(&self, key: &str, value: bool) -> Result<(), String> {
        let raw = serde_json::to_string(&value).map_err(|e| e.to_string())?;
        self.save_raw(key, &raw)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn off_browser_store_reads_unset_and_accepts_writes() {
        let store = WebSessionStore;
        assert_eq!(store.load_flag("portfolio.help.dismissed"), None);
        store
            .save_flag("portfolio.help.dismissed", true)
            .expect("save is accepted");
    }
}
