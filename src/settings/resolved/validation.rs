use server_search::{Theme, default_theme, theme_by_name, theme_names};
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Look up the configured theme, or the default one when none is set.
pub(crate) fn resolve_theme(
	name: Option<&str>,
	sources: &ConfigSources,
) -> Result<Theme, ConfigError> {
	let Some(name) = name else {
		return Ok(default_theme());
	};

	theme_by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme_names().join(", ")),
		)
	})
}

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.data_path.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"data.path",
			"",
			sources.source_for_data_path(),
			"must name a file",
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.log.level) {
		return Err(ConfigError::invalid(
			"log.level",
			config.log.level.clone(),
			sources.source_for_log_level(),
			err.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use server_search::PaletteLabels;
	use server_search::logging::LogSettings;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			data_path: PathBuf::from("server.json"),
			theme_name: None,
			theme: default_theme(),
			labels: PaletteLabels::default(),
			start_open: false,
			log: LogSettings::default(),
		}
	}

	#[test]
	fn defaults_pass_validation() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_data_path() {
		let config = ResolvedConfig {
			data_path: PathBuf::new(),
			..config()
		};
		let sources = ConfigSources {
			data_path: Some(SettingSource::CliFlag("--data")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "data.path");
		assert!(err.to_string().contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_malformed_log_level() {
		let mut config = config();
		config.log.level = "server_search=loud".into();
		let sources = ConfigSources {
			log_level: Some(SettingSource::Environment("SERVER_SEARCH__LOG__LEVEL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "log.level");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn missing_theme_name_uses_default() {
		let theme = resolve_theme(None, &ConfigSources::default()).expect("theme");
		assert_eq!(theme, default_theme());
	}
}
