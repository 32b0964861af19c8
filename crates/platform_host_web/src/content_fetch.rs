//! `fetch`-backed static content source.

use platform_host::{ContentSource, ContentSourceFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser content source that resolves paths relative to the page with `window.fetch`.
///
/// A `404` answer maps to `Ok(None)`; other non-success statuses are errors.
pub struct WebContentSource;

impl WebContentSource {
    #[cfg(target_arch = "wasm32")]
    async fn fetch(path: &str) -> Result<Option<String>, String> {
        use wasm_bindgen::JsCast;

        use crate::interop::await_promise;

        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let response = await_promise(window.fetch_with_str(path)).await?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| format!("fetch `{path}` did not yield a Response"))?;
        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(format!("fetch `{path}` failed with status {}", response.status()));
        }
        let text_promise = response
            .text()
            .map_err(crate::interop::js_error_to_string)?;
        let body = await_promise(text_promise).await?;
        body.as_string()
            .map(Some)
            .ok_or_else(|| format!("fetch `{path}` returned a non-text body"))
    }
}

impl ContentSource for WebContentSource {
    fn fetch_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentSourceFuture<'a, Result<Option<String>, String>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(Self::fetch(path))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async move {
                let _ = path;
                Ok(None)
            })
        }
    }
}
