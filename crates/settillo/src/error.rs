//! Error and result types shared by the settings manager and store adapters.

use std::fmt;

pub type StResult<T> = Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// No persistence is configured (the null store reporting itself).
	NoStore,
	/// The backing database reported a fault. Details are logged at the call site.
	DbError,
	/// Persisted settings data could not be decoded.
	Parse,
	/// Filesystem fault while reading or writing persisted settings.
	Io(std::io::Error),
	/// JSON serialization or deserialization fault.
	Json(serde_json::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NoStore => write!(f, "No store configured"),
			Error::DbError => write!(f, "Database error"),
			Error::Parse => write!(f, "Parse error"),
			Error::Io(err) => write!(f, "I/O error: {}", err),
			Error::Json(err) => write!(f, "JSON error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Error::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Json(err)
	}
}

// vim: ts=4
