//! Bundled colour themes and lookup by name.

mod loader;
mod types;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};

pub use types::{Theme, ThemeDescriptor};

static THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

fn catalog() -> &'static loader::Catalog {
	static CATALOG: OnceLock<loader::Catalog> = OnceLock::new();
	CATALOG.get_or_init(|| {
		// The theme files are compiled in; the loader tests keep them valid.
		loader::load_catalog(&THEME_DIR)
			.unwrap_or_else(|error| panic!("bundled themes are invalid: {error:#}"))
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// The theme marked `default` among the bundled ones.
#[must_use]
pub fn default_theme() -> Theme {
	catalog().default_theme
}

/// Every bundled theme, sorted by name.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeDescriptor> {
	catalog().themes.clone()
}

/// Same as [`builtin_themes`].
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	builtin_themes()
}

/// Theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	catalog()
		.themes
		.iter()
		.map(|descriptor| descriptor.name.clone())
		.collect()
}

/// Look up a theme by name or alias. Case, `_`, and spaces are ignored.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	catalog()
		.themes
		.iter()
		.find(|descriptor| {
			std::iter::once(&descriptor.name)
				.chain(&descriptor.aliases)
				.any(|candidate| normalize_name(candidate) == wanted)
		})
		.map(|descriptor| descriptor.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
