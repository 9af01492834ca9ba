//! Settillo: a namespaced key-value settings cache with pluggable store adapters.
//!
//! The [`SettingsManager`] keeps per-namespace settings in memory and writes
//! every change through to a [`StoreAdapter`]; the adapter makes them durable
//! and hands them back on the next startup. A [`SettingsWrapper`] binds one
//! namespace to a manager for call-site convenience. The built-in
//! [`NullStore`] persists nothing, which leaves a manager working as a pure
//! in-memory cache; real adapters live in their own crates.
//!
//! ```
//! # async fn demo() -> settillo::StResult<()> {
//! use settillo::{NullStore, SettingsManager};
//! use std::sync::Arc;
//!
//! let manager = SettingsManager::new(Arc::new(NullStore));
//! let fish = manager.create_wrapper("fish");
//!
//! // The cache takes the value even though the null store reports failure.
//! let _ = fish.set("color", "red".into()).await;
//! assert_eq!(fish.get("color"), Some("red".into()));
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod manager;
pub mod prelude;
pub mod store_adapter;
pub mod wrapper;

pub use error::{Error, StResult};
pub use manager::SettingsManager;
pub use store_adapter::{NamespaceSettings, NullStore, SettingsSnapshot, StoreAdapter};
pub use wrapper::SettingsWrapper;

// vim: ts=4
