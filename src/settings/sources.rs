use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use server_search::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "SERVER_SEARCH";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".server-search.toml"));
		files.push(current_dir.join("server-search.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".server-search.toml")));
		assert!(files.iter().any(|path| path.ends_with("server-search.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged_in_order() {
		let dir = tempfile::tempdir().expect("tempdir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[ui]\ntheme = \"slate\"\nstart_open = true\n").expect("write");
		fs::write(&second, "[ui]\ntheme = \"light\"\n").expect("write");

		let cli = CliArgs::parse_from([
			"server-search",
			"--no-config",
			"-c",
			first.to_str().expect("utf-8 path"),
			"-c",
			second.to_str().expect("utf-8 path"),
		]);
		let config = build_config(&cli).expect("config");

		assert_eq!(config.get_string("ui.theme").expect("theme"), "light");
		assert!(config.get_bool("ui.start_open").expect("start_open"));
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let cli = CliArgs::parse_from([
			"server-search",
			"--no-config",
			"-c",
			"/definitely/not/here.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
