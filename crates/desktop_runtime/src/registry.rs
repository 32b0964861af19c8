//! App registry: the static document describing every launchable application.
//!
//! The document is a JSON object keyed by app id:
//!
//! ```json
//! { "about": { "title": "About", "content": "<p>Hi</p>", "subtitle": "Who I am" } }
//! ```
//!
//! Entry order is preserved and drives dock, desktop icon, and mobile list order.

use platform_host::{fetch_json_with, ContentSource};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::{AppId, Application};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry document could not be loaded: {0}")]
    Load(String),
    #[error("registry document must be a JSON object keyed by app id")]
    NotAnObject,
    #[error("registry entry `{id}` is invalid: {reason}")]
    InvalidEntry { id: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    title: String,
    content: String,
    #[serde(default)]
    subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppRegistry {
    apps: Vec<Application>,
}

impl AppRegistry {
    pub fn new(apps: Vec<Application>) -> Self {
        let mut registry = Self::default();
        for app in apps {
            if registry.get(&app.id).is_none() {
                registry.apps.push(app);
            }
        }
        registry
    }

    /// Parses a registry document, keeping every valid entry and reporting the rest.
    pub fn from_value_lossy(document: Value) -> (Self, Vec<RegistryError>) {
        let Value::Object(entries) = document else {
            return (Self::default(), vec![RegistryError::NotAnObject]);
        };

        let mut apps = Vec::with_capacity(entries.len());
        let mut errors = Vec::new();
        for (id, raw) in entries {
            match serde_json::from_value::<RegistryEntry>(raw) {
                Ok(entry) => apps.push(Application {
                    id: AppId(id),
                    title: entry.title,
                    content: entry.content,
                    subtitle: entry.subtitle.filter(|s| !s.trim().is_empty()),
                }),
                Err(err) => errors.push(RegistryError::InvalidEntry {
                    id,
                    reason: err.to_string(),
                }),
            }
        }
        (Self::new(apps), errors)
    }

    pub fn get(&self, id: &AppId) -> Option<&Application> {
        self.apps.iter().find(|app| app.id == *id)
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.get(id).is_some()
    }

    pub fn apps(&self) -> &[Application] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Loads the registry document from `source`.
///
/// Never fails: a missing or unreadable document yields an empty registry. Every problem
/// encountered is returned alongside so the caller can log it.
pub async fn load_registry<S: ContentSource + ?Sized>(
    source: &S,
    path: &str,
) -> (AppRegistry, Vec<RegistryError>) {
    match fetch_json_with::<S, Value>(source, path).await {
        Ok(Some(document)) => AppRegistry::from_value_lossy(document),
        Ok(None) => (
            AppRegistry::default(),
            vec![RegistryError::Load(format!("{path} not found"))],
        ),
        Err(err) => (AppRegistry::default(), vec![RegistryError::Load(err)]),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryContentSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn entries_keep_document_order_and_optional_subtitles() {
        let (registry, errors) = AppRegistry::from_value_lossy(json!({
            "projects": { "title": "Projects", "content": "<ul></ul>", "subtitle": "Things I built" },
            "about": { "title": "About", "content": "<p>Hi</p>" },
            "research": { "title": "Research", "content": "<p/>", "subtitle": "  " }
        }));
        assert!(errors.is_empty(), "{errors:?}");

        let ids: Vec<&str> = registry.apps().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["projects", "about", "research"]);
        assert_eq!(
            registry.get(&AppId::from("projects")).and_then(|a| a.subtitle.clone()),
            Some("Things I built".to_string())
        );
        assert_eq!(registry.get(&AppId::from("about")).unwrap().subtitle, None);
        assert_eq!(registry.get(&AppId::from("research")).unwrap().subtitle, None);
    }

    #[test]
    fn lossy_parse_keeps_valid_entries() {
        let (registry, errors) = AppRegistry::from_value_lossy(json!({
            "about": { "title": "About", "content": "<p>Hi</p>" },
            "broken": { "content": "missing title" }
        }));

        assert_eq!(registry.len(), 1);
        assert!(matches!(
            errors.as_slice(),
            [RegistryError::InvalidEntry { id, .. }] if id == "broken"
        ));
        let (_, errors) = AppRegistry::from_value_lossy(json!({ "broken": 3 }));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let (registry, errors) = AppRegistry::from_value_lossy(json!(["about"]));
        assert!(registry.is_empty());
        assert_eq!(errors, vec![RegistryError::NotAnObject]);
    }

    #[test]
    fn load_failures_degrade_to_an_empty_registry() {
        let source = MemoryContentSource::default();
        source.insert("content.json", "{ definitely not json");

        let (registry, errors) = block_on(load_registry(&source, "content.json"));
        assert!(registry.is_empty());
        assert_eq!(errors.len(), 1);

        let (registry, errors) = block_on(load_registry(&source, "elsewhere.json"));
        assert!(registry.is_empty());
        assert_eq!(
            errors,
            vec![RegistryError::Load("elsewhere.json not found".to_string())]
        );
    }

    #[test]
    fn load_parses_served_document() {
        let source = MemoryContentSource::default();
        source.insert(
            "content.json",
            r#"{ "about": { "title": "About", "content": "<p>Hi</p>" } }"#,
        );

        let (registry, errors) = block_on(load_registry(&source, "content.json"));
        assert!(errors.is_empty());
        assert_eq!(registry.apps()[0].title, "About");
    }
}
