//! Filesystem store adapter: one JSON document per namespace.
//!
//! Each namespace lives under the base directory as `<escaped name>.json`,
//! an object mapping keys to JSON values with cleared keys serialized as
//! `null`. Because JSON cannot tell `null` apart from a cleared key, an
//! explicit null payload hydrates as cleared after a reload.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{create_dir_all, read, read_dir, rename, write};
use tokio::sync::Mutex;

use settillo::prelude::*;

/// Escapes a namespace into a reversible, filename-safe form.
///
/// Every byte outside `[A-Za-z0-9_-]` becomes `%XX`, so path separators and
/// dots cannot escape the base directory and distinct namespaces never share
/// a file.
fn escape_namespace(namespace: &str) -> String {
	let mut escaped = String::with_capacity(namespace.len());
	for b in namespace.bytes() {
		if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
			escaped.push(b as char);
		} else {
			let _ = write!(escaped, "%{:02X}", b);
		}
	}
	escaped
}

/// Reverses [`escape_namespace`]. `None` means the name is not ours.
fn unescape_namespace(escaped: &str) -> Option<String> {
	let bytes = escaped.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut i = 0;
	while i < bytes.len() {
		if bytes[i] == b'%' {
			let hex = std::str::from_utf8(bytes.get(i + 1..i + 3)?).ok()?;
			out.push(u8::from_str_radix(hex, 16).ok()?);
			i += 3;
		} else {
			out.push(bytes[i]);
			i += 1;
		}
	}
	String::from_utf8(out).ok()
}

fn namespace_file_path(base_dir: &Path, namespace: &str) -> PathBuf {
	base_dir.join(format!("{}.json", escape_namespace(namespace)))
}

/// Store adapter persisting each namespace as a JSON document on disk.
#[derive(Debug)]
pub struct StoreAdapterFs {
	base_dir: Box<Path>,
	// Serializes document writes so overlapping updates cannot interleave.
	write_lock: Mutex<()>,
}

impl StoreAdapterFs {
	/// Creates the adapter, making sure `base_dir` exists.
	pub async fn new(base_dir: impl Into<PathBuf>) -> StResult<Self> {
		let base_dir: PathBuf = base_dir.into();
		create_dir_all(&base_dir).await?;

		Ok(Self {
			base_dir: base_dir.into_boxed_path(),
			write_lock: Mutex::new(()),
		})
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterFs {
	async fn init(&self) -> StResult<SettingsSnapshot> {
		let mut snapshot = SettingsSnapshot::new();
		let mut entries = read_dir(&*self.base_dir).await?;

		while let Some(entry) = entries.next_entry().await? {
			let name = entry.file_name();
			let Some(name) = name.to_str() else { continue };
			let Some(stem) = name.strip_suffix(".json") else { continue };
			let Some(namespace) = unescape_namespace(stem) else {
				warn!("skipping settings file with foreign name: {:?}", entry.path());
				continue;
			};

			let data = read(entry.path()).await?;
			let settings: NamespaceSettings = serde_json::from_slice(&data)?;
			snapshot.insert(namespace.into(), settings);
		}

		debug!("loaded settings for {} namespaces from {:?}", snapshot.len(), self.base_dir);
		Ok(snapshot)
	}

	async fn update(&self, namespace: &str, settings: &NamespaceSettings) -> StResult<()> {
		let data = serde_json::to_vec(settings)?;
		let path = namespace_file_path(&self.base_dir, namespace);
		let tmp_path = path.with_extension("json.tmp");

		let _guard = self.write_lock.lock().await;
		write(&tmp_path, &data).await?;
		rename(&tmp_path, &path).await?;

		debug!("persisted {} keys for {}", settings.len(), namespace);
		Ok(())
	}

	fn extension(&self) -> &'static str {
		".json"
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn escaping_round_trips() {
		for namespace in ["fish", "r/frogs", "../escape", "café", "", "a%b", "__proto__"] {
			let escaped = escape_namespace(namespace);
			assert!(
				escaped
					.bytes()
					.all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'%'),
				"unsafe byte in {:?}",
				escaped
			);
			assert_eq!(unescape_namespace(&escaped).as_deref(), Some(namespace));
		}
	}

	#[test]
	fn escaped_names_stay_in_the_base_dir() {
		let path = namespace_file_path(Path::new("/data"), "../../etc/passwd");
		assert!(path.starts_with("/data"));
		assert!(!path.to_string_lossy().contains(".."));
	}

	#[test]
	fn foreign_names_are_rejected() {
		assert_eq!(unescape_namespace("weird%zz"), None);
		assert_eq!(unescape_namespace("dangling%2"), None);
		assert_eq!(unescape_namespace("fish"), Some("fish".into()));
	}
}

// vim: ts=4
