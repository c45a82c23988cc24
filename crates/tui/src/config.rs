/// Text rendered by the palette's trigger and dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteLabels {
	/// Label on the trigger control.
	pub trigger_label: String,
	/// Keyboard shortcut hint shown at the right edge of the trigger.
	pub shortcut_hint: String,
	/// Placeholder displayed in the empty query input.
	pub placeholder: String,
	/// Message shown when no group has a visible item.
	pub empty_label: String,
	/// Title on the dialog border. Empty means untitled.
	pub dialog_title: String,
}

impl Default for PaletteLabels {
	fn default() -> Self {
		Self {
			trigger_label: "Search".to_string(),
			shortcut_hint: "Ctrl K".to_string(),
			placeholder: "Search all channels and members".to_string(),
			empty_label: "No Results found".to_string(),
			dialog_title: String::new(),
		}
	}
}
