//! Minimal Settillo wiring: a settings manager over the filesystem adapter.
//!
//! Run with `RUST_LOG=debug` to watch the cache and store traces.

use std::{env, sync::Arc};

use settillo::prelude::*;
use settillo_store_adapter_fs::StoreAdapterFs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> StResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let data_dir = env::var("SETTILLO_DATA_DIR").unwrap_or("./data".to_string());
	info!("storing settings under {}", data_dir);

	let store = Arc::new(StoreAdapterFs::new(&data_dir).await?);
	let manager = SettingsManager::new(store);
	if let Err(err) = manager.init().await {
		warn!("store init failed, continuing in memory only: {}", err);
	}

	let fish = manager.create_wrapper("fish");
	fish.set("color", "red".into()).await?;
	info!("fish color: {:?}", fish.get("color"));

	fish.clear("color").await?;
	info!("fish color after clear: {:?}", fish.get("color"));
	info!("frog color (never set): {:?}", manager.get("frog", "color"));

	Ok(())
}

// vim: ts=4
