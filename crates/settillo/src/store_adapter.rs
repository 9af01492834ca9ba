//! Store adapter interface: the persistence seam of the settings manager.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::debug;

use crate::error::{Error, StResult};

/// Settings of a single namespace.
///
/// A cleared key stays present, mapped to `None`, so stores can persist the
/// fact that it was explicitly cleared.
pub type NamespaceSettings = HashMap<Box<str>, Option<serde_json::Value>>;

/// Everything a store holds: the settings of every known namespace.
pub type SettingsSnapshot = HashMap<Box<str>, NamespaceSettings>;

/// A Settillo store adapter
///
/// Store adapters persist the settings cache of the manager that owns them.
/// The manager calls [`init`](StoreAdapter::init) once at startup and
/// [`update`](StoreAdapter::update) after every mutating cache operation.
/// Managers hold their adapter behind an [`Arc`](std::sync::Arc), so
/// implementations must be shareable across tasks.
///
/// Overlapping `update` calls for the same namespace are not serialized by
/// the manager; adapters that cannot tolerate interleaved writes must
/// serialize them internally.
#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// Prepares the backing store and returns the previously persisted
	/// settings so the manager can warm its cache.
	async fn init(&self) -> StResult<SettingsSnapshot>;

	/// Persists the current settings of `namespace`.
	///
	/// `settings` is a snapshot of the namespace taken right after the
	/// mutation that triggered the call, cleared keys included.
	async fn update(&self, namespace: &str, settings: &NamespaceSettings) -> StResult<()>;

	/// File extension of the store's on-disk format, if it has one.
	///
	/// Informational only; the manager never interprets it.
	fn extension(&self) -> &'static str {
		""
	}
}

/// Store adapter that does not store anything.
///
/// Gives a manager that needs no durability something to call: both hooks
/// report failure without performing any I/O, and the manager keeps working
/// as a pure in-memory cache.
#[derive(Debug, Default)]
pub struct NullStore;

#[async_trait]
impl StoreAdapter for NullStore {
	async fn init(&self) -> StResult<SettingsSnapshot> {
		debug!("null store does not initialize");
		Err(Error::NoStore)
	}

	async fn update(&self, _namespace: &str, _settings: &NamespaceSettings) -> StResult<()> {
		debug!("null store does not update");
		Err(Error::NoStore)
	}
}


// vim: ts=4
