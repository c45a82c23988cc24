use serde::Deserialize;
use server_search::PaletteLabels;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) trigger_label: Option<String>,
	pub(super) shortcut_hint: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) empty_label: Option<String>,
	pub(super) dialog_title: Option<String>,
	pub(super) start_open: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) labels: PaletteLabels,
	pub(super) theme: Option<String>,
	pub(super) start_open: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if cli.open {
			self.start_open = Some(true);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = PaletteLabels::default();
		if let Some(label) = self.trigger_label {
			labels.trigger_label = label;
		}
		if let Some(hint) = self.shortcut_hint {
			labels.shortcut_hint = hint;
		}
		if let Some(placeholder) = self.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(label) = self.empty_label {
			labels.empty_label = label;
		}
		if let Some(title) = self.dialog_title {
			labels.dialog_title = title;
		}

		UiResolution {
			labels,
			theme: self.theme.map(|name| name.trim().to_string()),
			start_open: self.start_open.unwrap_or(false),
		}
	}
}
