use std::path::PathBuf;

use server_search::logging::LogSettings;
use server_search::{PaletteLabels, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::resolve_theme;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub data_path: PathBuf,
	/// Theme name as configured; `None` means the default theme.
	pub theme_name: Option<String>,
	pub theme: Theme,
	pub labels: PaletteLabels,
	pub start_open: bool,
	pub log: LogSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
