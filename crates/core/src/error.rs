use std::io;

use thiserror::Error;

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read dataset {origin}")]
	Io {
		origin: String,
		#[source]
		source: io::Error,
	},

	#[error("invalid JSON dataset {origin}")]
	Json {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid TOML dataset {origin}")]
	Toml {
		origin: String,
		#[source]
		source: toml::de::Error,
	},

	/// The file extension is neither `.json` nor `.toml`.
	#[error("unsupported dataset format for {origin} (expected .json or .toml)")]
	UnsupportedFormat { origin: String },

	/// The document holds neither `groups` nor a `server` profile.
	#[error("dataset {origin} defines neither `groups` nor `server`")]
	Empty { origin: String },
}
