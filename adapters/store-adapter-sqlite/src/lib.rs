//! SQLite store adapter: settings rows keyed by namespace and name.
//!
//! Values are stored as JSON text; a SQL `NULL` marks a cleared key, so
//! tombstones and explicit JSON `null` payloads round-trip distinctly.

use std::path::Path;

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool},
};

use settillo::prelude::*;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			namespace text NOT NULL,
			name text NOT NULL,
			value text,
			PRIMARY KEY(namespace, name)
		)",
	)
	.execute(db)
	.await?;

	Ok(())
}

/// Store adapter persisting settings in a SQLite database.
#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	/// Opens the database at `path`, creating the file if missing.
	pub async fn new(path: impl AsRef<Path>) -> StResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	async fn init(&self) -> StResult<SettingsSnapshot> {
		init_db(&self.db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		let rows = sqlx::query("SELECT namespace, name, value FROM settings")
			.fetch_all(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		let mut snapshot = SettingsSnapshot::new();
		for row in rows {
			let namespace: String = row.get("namespace");
			let name: String = row.get("name");
			let raw: Option<String> = row.get("value");
			let value: Option<serde_json::Value> = match raw {
				Some(raw) => Some(
					serde_json::from_str(&raw)
						.inspect_err(|err| {
							warn!("DB: bad JSON for {}/{}: {:#?}", namespace, name, err);
						})
						.map_err(|_| Error::Parse)?,
				),
				None => None,
			};
			snapshot.entry(namespace.into()).or_default().insert(name.into(), value);
		}

		debug!("loaded settings for {} namespaces", snapshot.len());
		Ok(snapshot)
	}

	async fn update(&self, namespace: &str, settings: &NamespaceSettings) -> StResult<()> {
		let mut tx = self.db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		sqlx::query("DELETE FROM settings WHERE namespace = ?")
			.bind(namespace)
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		for (name, value) in settings {
			sqlx::query("INSERT INTO settings (namespace, name, value) VALUES (?, ?, ?)")
				.bind(namespace)
				.bind(&**name)
				.bind(value.as_ref().map(serde_json::Value::to_string))
				.execute(&mut *tx)
				.await
				.inspect_err(inspect)
				.map_err(|_| Error::DbError)?;
		}

		tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		debug!("persisted {} keys for {}", settings.len(), namespace);
		Ok(())
	}

	fn extension(&self) -> &'static str {
		".sqlite3"
	}
}

// vim: ts=4
