//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the concrete browser services the shell needs: the `sessionStorage` flag
//! store and the `fetch`-backed content source. Off-browser builds fall back to in-memory
//! adapters so the runtime and its tests compile everywhere.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod content_fetch;
mod interop;
pub mod session_storage;

pub use adapters::{
    build_host_services, content_source, host_strategy_name, selected_host_strategy,
    session_flag_store, ContentSourceAdapter, SessionFlagStoreAdapter,
};
pub use content_fetch::WebContentSource;
pub use session_storage::WebSessionStore;
