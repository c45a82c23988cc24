//! File-backed `tracing` setup.
//!
//! The terminal belongs to the palette while it runs, so log output goes to a
//! file (by default `server-search.log` in the cache directory).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app_dirs;

/// Environment variable holding a filter directive that beats the configured level.
pub const LOG_ENV: &str = "SERVER_SEARCH_LOG";
pub const DEFAULT_LOG_FILE: &str = "server-search.log";

/// Where logs go and how much is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	pub level: String,
	/// Explicit log file; `None` uses the cache directory.
	pub file: Option<PathBuf>,
}

impl Default for LogSettings {
	fn default() -> Self {
		Self {
			level: "warn".to_string(),
			file: None,
		}
	}
}

/// Resolve the file logs are appended to.
pub fn log_path(settings: &LogSettings) -> Result<PathBuf> {
	match &settings.file {
		Some(path) => Ok(path.clone()),
		None => Ok(app_dirs::get_cache_dir()?.join(DEFAULT_LOG_FILE)),
	}
}

/// Build the filter from `SERVER_SEARCH_LOG`, falling back to `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level))
		.with_context(|| format!("invalid log level `{level}`"))
}

/// Install the global subscriber. Returns the log file in use.
pub fn initialize(settings: &LogSettings) -> Result<PathBuf> {
	let path = log_path(settings)?;
	let file = open_log_file(&path)?;
	let filter = build_filter(&settings.level)?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(true),
		)
		.try_init()
		.context("failed to install the tracing subscriber")?;

	tracing::debug!(path = %path.display(), "logging initialised");
	Ok(path)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_file_wins() {
		let settings = LogSettings {
			level: "info".into(),
			file: Some(PathBuf::from("/tmp/palette.log")),
		};
		assert_eq!(
			log_path(&settings).expect("path"),
			PathBuf::from("/tmp/palette.log")
		);
	}

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested/logs/server-search.log");
		open_log_file(&path).expect("open");
		assert!(path.exists());
	}

	#[test]
	fn level_directives_parse() {
		assert!(EnvFilter::try_new("debug").is_ok());
		assert!(EnvFilter::try_new("server_search_tui=trace,warn").is_ok());
	}
}
