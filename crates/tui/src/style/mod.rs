//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the palette. They are loaded from
//! TOML definitions bundled into the binary.

pub mod theme;

pub use theme::{
	Theme, ThemeDescriptor, builtin_themes, by_name, default_theme, descriptors, names,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
