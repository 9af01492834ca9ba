//! Settings manager: the namespaced in-memory cache and its write-through logic.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;

/// Namespaced settings cache with write-through persistence.
///
/// All state is one namespace → key → value map behind a shared read-write
/// lock, so managers clone cheaply and every clone observes the same cache.
/// Mutations land in the cache first and are then pushed to the store adapter;
/// a failed push leaves the cache modified, so callers that care about
/// durability must check the returned result.
#[derive(Clone, Debug)]
pub struct SettingsManager {
	cache: Arc<RwLock<SettingsSnapshot>>,
	store: Arc<dyn StoreAdapter>,
}

impl SettingsManager {
	/// Creates a manager with an empty cache on top of `store`.
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self {
			cache: Arc::new(RwLock::new(HashMap::new())),
			store,
		}
	}

	/// Initializes the store and warms the cache with whatever it persisted
	/// before.
	///
	/// Meant to be called once right after construction. When the store
	/// reports failure the cache is left untouched and the manager keeps
	/// working as a pure in-memory cache.
	pub async fn init(&self) -> StResult<()> {
		let persisted = self.store.init().await?;
		debug!("store initialized with settings for {} namespaces", persisted.len());
		*self.cache.write() = persisted;
		Ok(())
	}

	/// Makes sure a settings section exists for `namespace`.
	///
	/// Returns whether a section was created (`true`) or one already existed
	/// (`false`). Idempotent, touches only the cache.
	pub fn ensure(&self, namespace: &str) -> bool {
		let mut cache = self.cache.write();
		let created = !cache.contains_key(namespace);
		Self::section_mut(&mut cache, namespace);
		created
	}

	// Fetches the mutable section of a namespace under an already held write
	// lock, creating it first if needed, so ensure-and-write is one atomic
	// cache step.
	fn section_mut<'c>(
		cache: &'c mut SettingsSnapshot,
		namespace: &str,
	) -> &'c mut NamespaceSettings {
		if !cache.contains_key(namespace) {
			debug!("making settings section for {} as it did not have one", namespace);
		}
		cache.entry(Box::from(namespace)).or_default()
	}

	/// Sets `key` to `value` for a namespace and persists the change.
	///
	/// The cache always takes the new value; the returned result is the
	/// store's, so a persistence failure is visible but never rolled back.
	pub async fn set(&self, namespace: &str, key: &str, value: serde_json::Value) -> StResult<()> {
		let settings = {
			let mut cache = self.cache.write();
			let section = Self::section_mut(&mut cache, namespace);
			debug!("set '{}' to '{}' for {}", key, value, namespace);
			section.insert(key.into(), Some(value));
			section.clone()
		};
		self.store.update(namespace, &settings).await
	}

	/// Clears `key` for a namespace and persists the change.
	///
	/// Clearing is not removal: the key stays in the section as an explicit
	/// absent marker, which lets stores record the clear durably. Same result
	/// contract as [`set`](Self::set).
	pub async fn clear(&self, namespace: &str, key: &str) -> StResult<()> {
		let settings = {
			let mut cache = self.cache.write();
			let section = Self::section_mut(&mut cache, namespace);
			debug!("cleared '{}' for {}", key, namespace);
			section.insert(key.into(), None);
			section.clone()
		};
		self.store.update(namespace, &settings).await
	}

	/// Reads the value of `key` in `namespace` from the cache.
	///
	/// Pure read: never creates a section, never touches the store. `None`
	/// means the namespace is unknown, the key was never set, or the key was
	/// cleared.
	pub fn get(&self, namespace: &str, key: &str) -> Option<serde_json::Value> {
		self.cache
			.read()
			.get(namespace)
			.and_then(|section| section.get(key).cloned())
			.flatten()
	}

	/// Whether a settings section exists for `namespace`.
	pub fn has_namespace(&self, namespace: &str) -> bool {
		self.cache.read().contains_key(namespace)
	}

	/// Namespaces that currently have a settings section.
	pub fn namespaces(&self) -> Vec<Box<str>> {
		self.cache.read().keys().cloned().collect()
	}

	/// Keys present in a namespace's section, cleared keys included.
	///
	/// A cleared key keeps its place in the section as an absent marker, so
	/// it still shows up here even though [`get`](Self::get) reports nothing
	/// for it.
	pub fn keys(&self, namespace: &str) -> Vec<Box<str>> {
		self.cache
			.read()
			.get(namespace)
			.map(|section| section.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// The store adapter this manager persists through.
	pub fn store(&self) -> &Arc<dyn StoreAdapter> {
		&self.store
	}

	/// Creates a [`SettingsWrapper`] bound to this manager and `namespace`.
	///
	/// Pure factory: the namespace's section is not created until the first
	/// mutation through the wrapper.
	pub fn create_wrapper(&self, namespace: impl Into<Box<str>>) -> SettingsWrapper {
		SettingsWrapper::new(namespace, self.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn manager() -> SettingsManager {
		SettingsManager::new(Arc::new(NullStore))
	}

	#[test]
	fn ensure_is_idempotent() {
		let mgr = manager();
		assert!(mgr.ensure("fish"));
		assert!(!mgr.ensure("fish"));
		assert_eq!(mgr.namespaces().len(), 1);
	}

	#[test]
	fn get_never_creates_a_section() {
		let mgr = manager();
		assert_eq!(mgr.get("frog", "color"), None);
		assert_eq!(mgr.get("frog", "color"), None);
		assert!(!mgr.has_namespace("frog"));
		assert!(mgr.namespaces().is_empty());
	}

	#[test]
	fn keys_of_unknown_namespace_is_empty() {
		let mgr = manager();
		assert!(mgr.keys("frog").is_empty());
		assert!(!mgr.has_namespace("frog"));
	}
}

// vim: ts=4
