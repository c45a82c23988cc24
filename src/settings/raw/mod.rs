use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;
use server_search::logging::LogSettings;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource, resolve_theme};
use crate::cli::CliArgs;

mod ui;

use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	ui: UiSection,
	log: LogSection,
}

/// Where the dataset comes from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.data.path = Some(path);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.log.file = Some(file);
		}
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			data_path: detect_source(
				cli.data.is_some(),
				self.data.path.is_some(),
				"SERVER_SEARCH__DATA__PATH",
				"--data",
				"data.path",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SERVER_SEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"SERVER_SEARCH__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let data_path = self.data.path.ok_or(ConfigError::Missing {
			key: "data.path",
			hint: "pass --data FILE or set data.path in a config file",
		})?;

		let ui = self.ui.finalize();
		let theme = resolve_theme(ui.theme.as_deref(), &sources)?;

		let defaults = LogSettings::default();
		let log = LogSettings {
			level: self.log.level.unwrap_or(defaults.level),
			file: self.log.file,
		};

		let config = ResolvedConfig {
			data_path,
			theme_name: ui.theme,
			theme,
			labels: ui.labels,
			start_open: ui.start_open,
			log,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
