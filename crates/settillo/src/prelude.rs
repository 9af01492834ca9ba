//! Common imports for settillo and store adapter implementations.

pub use crate::error::{Error, StResult};
pub use crate::manager::SettingsManager;
pub use crate::store_adapter::{NamespaceSettings, NullStore, SettingsSnapshot, StoreAdapter};
pub use crate::wrapper::SettingsWrapper;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
