//! Static content source contracts used to load the app registry document.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::de::DeserializeOwned;

/// Object-safe boxed future used by [`ContentSource`] async methods.
pub type ContentSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that resolves a relative document path to its text body.
pub trait ContentSource {
    /// Fetches the text body stored at `path`.
    ///
    /// Returns `Ok(None)` when the host answers but has no document at `path`.
    fn fetch_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentSourceFuture<'a, Result<Option<String>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Content source that never has any document.
pub struct NoopContentSource;

impl ContentSource for NoopContentSource {
    fn fetch_text<'a>(
        &'a self,
        _path: &'a str,
    ) -> ContentSourceFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory content source keyed by path.
pub struct MemoryContentSource {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryContentSource {
    /// Stores `body` under `path`, replacing any previous document.
    pub fn insert(&self, path: impl Into<String>, body: impl Into<String>) {
        self.inner.borrow_mut().insert(path.into(), body.into());
    }
}

impl ContentSource for MemoryContentSource {
    fn fetch_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentSourceFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(path).cloned()) })
    }
}

/// Fetches and deserializes a JSON document through a [`ContentSource`] implementation.
///
/// # Errors
///
/// Returns an error when the fetch fails or the body is not valid JSON for `T`.
pub async fn fetch_json_with<S: ContentSource + ?Sized, T: DeserializeOwned>(
    source: &S,
    path: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = source.fetch_text(path).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("{path}: {e}"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::Value;

    use super::*;

    #[test]
    fn memory_source_serves_inserted_documents() {
        let source = MemoryContentSource::default();
        source.insert("content.json", "{\"about\":{}}");
        let source_obj: &dyn ContentSource = &source;

        assert_eq!(
            block_on(source_obj.fetch_text("content.json")).expect("fetch"),
            Some("{\"about\":{}}".to_string())
        );
        assert_eq!(
            block_on(source_obj.fetch_text("missing.json")).expect("fetch"),
            None
        );
    }

    #[test]
    fn fetch_json_reports_parse_errors_with_path() {
        let source = MemoryContentSource::default();
        source.insert("content.json", "{not json");

        let err = block_on(fetch_json_with::<_, Value>(&source, "content.json"))
            .expect_err("invalid json");
        assert!(err.starts_with("content.json:"), "unexpected error: {err}");
    }

    #[test]
    fn noop_source_is_empty() {
        let loaded: Option<Value> =
            block_on(fetch_json_with(&NoopContentSource, "content.json")).expect("fetch");
        assert_eq!(loaded, None);
    }
}
