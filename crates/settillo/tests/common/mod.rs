//! Shared test stores for the settings manager integration tests.
//!
//! `MemStore` persists into process memory and records every `update` call,
//! so tests can assert on what the manager hands to its store. `FailingStore`
//! fails every call, for coverage of the no-rollback contract.

use async_trait::async_trait;
use parking_lot::Mutex;

use settillo::{Error, NamespaceSettings, SettingsSnapshot, StResult, StoreAdapter};

/// In-memory store that records every update call.
#[derive(Debug, Default)]
pub struct MemStore {
	seeded: SettingsSnapshot,
	pub updates: Mutex<Vec<(Box<str>, NamespaceSettings)>>,
}

impl MemStore {
	/// A store whose `init` hands back `seeded` for cache warming.
	pub fn seeded(seeded: SettingsSnapshot) -> Self {
		Self {
			seeded,
			updates: Mutex::new(Vec::new()),
		}
	}
}

#[async_trait]
impl StoreAdapter for MemStore {
	async fn init(&self) -> StResult<SettingsSnapshot> {
		Ok(self.seeded.clone())
	}

	async fn update(&self, namespace: &str, settings: &NamespaceSettings) -> StResult<()> {
		self.updates.lock().push((namespace.into(), settings.clone()));
		Ok(())
	}
}

/// Store that fails every call.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl StoreAdapter for FailingStore {
	async fn init(&self) -> StResult<SettingsSnapshot> {
		Err(Error::DbError)
	}

	async fn update(&self, _namespace: &str, _settings: &NamespaceSettings) -> StResult<()> {
		Err(Error::DbError)
	}
}

/// Common test setup helper
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

// vim: ts=4
