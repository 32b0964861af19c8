//! Typed host-domain contracts shared by the shell runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: session flag storage, the static
//! content source used to load the app registry, and time helpers. Concrete browser adapters live
//! in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod host;
pub mod session;
pub mod time;

pub use content::{
    fetch_json_with, ContentSource, ContentSourceFuture, MemoryContentSource, NoopContentSource,
};
pub use host::{HostServices, HostStrategy};
pub use session::{session_store, MemorySessionStore, SessionFlagStore};
pub use time::{shell_elapsed_ms, unix_time_ms_now};
