//! Per-namespace convenience facade over a settings manager.

use crate::prelude::*;

/// Binds one namespace to a [`SettingsManager`] so call sites can drop the
/// namespace argument.
///
/// Wrappers hold a clone of the manager; clones are cheap and every wrapper
/// over the same manager observes the same cache.
#[derive(Clone, Debug)]
pub struct SettingsWrapper {
	namespace: Box<str>,
	manager: SettingsManager,
}

impl SettingsWrapper {
	/// Creates a wrapper for `namespace` on top of `manager`.
	pub fn new(namespace: impl Into<Box<str>>, manager: SettingsManager) -> Self {
		Self {
			namespace: namespace.into(),
			manager,
		}
	}

	/// The namespace this wrapper is bound to.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// The manager behind this wrapper, for operations beyond the bound
	/// namespace.
	pub fn manager(&self) -> &SettingsManager {
		&self.manager
	}

	/// Sets `key` to `value` for the bound namespace.
	pub async fn set(&self, key: &str, value: serde_json::Value) -> StResult<()> {
		self.manager.set(&self.namespace, key, value).await
	}

	/// Clears `key` for the bound namespace.
	pub async fn clear(&self, key: &str) -> StResult<()> {
		self.manager.clear(&self.namespace, key).await
	}

	/// Reads `key` from the bound namespace.
	pub fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.manager.get(&self.namespace, key)
	}
}

// vim: ts=4
