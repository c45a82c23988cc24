//! Parsing of the bundled `themes/*.toml` files.
//!
//! Each file names the theme and gives one table per palette slot:
//!
//! ```toml
//! name = "blurple"
//! aliases = ["discord"]
//! default = true
//!
//! [header]
//! fg = "#949ba4"
//! bold = true
//! ```

use anyhow::{Context, Result, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::types::{Theme, ThemeDescriptor};

/// Every bundled theme plus the one marked `default`.
#[derive(Debug)]
pub(super) struct Catalog {
	pub(super) themes: Vec<ThemeDescriptor>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	header: Slot,
	row_highlight: Slot,
	prompt: Slot,
	empty: Slot,
	highlight: Slot,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Slot {
	fg: Option<HexColor>,
	bg: Option<HexColor>,
	bold: bool,
}

/// `#rrggbb` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
struct HexColor(Color);

impl TryFrom<String> for HexColor {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let digits = value
			.trim()
			.strip_prefix('#')
			.filter(|digits| digits.len() == 6)
			.ok_or_else(|| format!("expected a `#rrggbb` colour, found `{value}`"))?;
		let rgb = u32::from_str_radix(digits, 16)
			.map_err(|_| format!("`{value}` is not a hex colour"))?;
		let [_, r, g, b] = rgb.to_be_bytes();
		Ok(Self(Color::Rgb(r, g, b)))
	}
}

impl From<Slot> for Style {
	fn from(slot: Slot) -> Self {
		let mut style = Style::new();
		if let Some(HexColor(fg)) = slot.fg {
			style = style.fg(fg);
		}
		if let Some(HexColor(bg)) = slot.bg {
			style = style.bg(bg);
		}
		if slot.bold {
			style = style.add_modifier(Modifier::BOLD);
		}
		style
	}
}

impl ThemeFile {
	fn into_descriptor(self) -> (ThemeDescriptor, bool) {
		let mut aliases: Vec<String> = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect();
		aliases.sort_unstable();
		aliases.dedup();

		let theme = Theme {
			header: self.header.into(),
			row_highlight: self.row_highlight.into(),
			prompt: self.prompt.into(),
			empty: self.empty.into(),
			highlight: self.highlight.into(),
		};
		let descriptor = ThemeDescriptor {
			name: self.name.trim().to_string(),
			aliases,
			theme,
		};
		(descriptor, self.default)
	}
}

/// Parse every `.toml` file in `dir`, sorted by theme name.
///
/// Fails when a file is malformed, when two themes claim the same name or
/// alias, or when more than one theme is marked `default`. Without a marked
/// default the first theme by name is used.
pub(super) fn load_catalog(dir: &Dir) -> Result<Catalog> {
	let mut themes = Vec::new();
	let mut default_name: Option<String> = None;

	for file in dir.files() {
		let path = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("theme file {path} is not valid UTF-8"))?;
		let parsed: ThemeFile =
			toml::from_str(contents).with_context(|| format!("invalid theme file {path}"))?;

		let (descriptor, is_default) = parsed.into_descriptor();
		if is_default {
			if let Some(existing) = &default_name {
				bail!(
					"themes `{existing}` and `{}` are both marked default",
					descriptor.name
				);
			}
			default_name = Some(descriptor.name.clone());
		}
		themes.push(descriptor);
	}

	themes.sort_by(|a, b| a.name.cmp(&b.name));
	check_unique_names(&themes)?;

	let default_theme = match &default_name {
		Some(name) => themes.iter().find(|descriptor| &descriptor.name == name),
		None => themes.first(),
	}
	.map(|descriptor| descriptor.theme)
	.context("no theme files were found")?;

	Ok(Catalog {
		themes,
		default_theme,
	})
}

fn check_unique_names(themes: &[ThemeDescriptor]) -> Result<()> {
	let mut claimed: Vec<(String, &str)> = Vec::new();
	for descriptor in themes {
		let names = std::iter::once(&descriptor.name).chain(&descriptor.aliases);
		for name in names {
			let key = super::normalize_name(name);
			if let Some((_, owner)) = claimed.iter().find(|(taken, _)| *taken == key) {
				bail!(
					"theme name `{name}` of `{}` is already used by `{owner}`",
					descriptor.name
				);
			}
			claimed.push((key, descriptor.name.as_str()));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(contents: &str) -> Result<ThemeFile, toml::de::Error> {
		toml::from_str(contents)
	}

	const MINIMAL: &str = r##"
name = "mono"
[header]
fg = "#ffffff"
bold = true
[row_highlight]
bg = "#202020"
[prompt]
[empty]
[highlight]
"##;

	#[test]
	fn slots_become_styles() {
		let (descriptor, is_default) = parse(MINIMAL).expect("theme").into_descriptor();
		assert!(!is_default);
		assert_eq!(descriptor.name, "mono");

		let header = descriptor.theme.header;
		assert_eq!(header.fg, Some(Color::Rgb(255, 255, 255)));
		assert!(header.add_modifier.contains(Modifier::BOLD));
		assert_eq!(descriptor.theme.row_highlight.bg, Some(Color::Rgb(0x20, 0x20, 0x20)));
		assert_eq!(descriptor.theme.prompt, Style::new());
	}

	#[test]
	fn colours_must_be_six_digit_hex() {
		assert_eq!(
			HexColor::try_from("#5865f2".to_string()),
			Ok(HexColor(Color::Rgb(0x58, 0x65, 0xf2)))
		);
		assert!(HexColor::try_from("#abc".to_string()).is_err());
		assert!(HexColor::try_from("red".to_string()).is_err());
		assert!(HexColor::try_from("#gggggg".to_string()).is_err());
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let err = parse(&MINIMAL.replace("bold = true", "italic = true")).unwrap_err();
		assert!(err.to_string().contains("italic"));
	}

	#[test]
	fn duplicate_aliases_are_rejected() {
		let theme = parse(MINIMAL).expect("theme").into_descriptor().0;
		let clash = ThemeDescriptor {
			name: "other".into(),
			aliases: vec!["MONO".into()],
			theme: theme.theme,
		};
		assert!(check_unique_names(&[theme, clash]).is_err());
	}

	#[test]
	fn bundled_themes_load_with_blurple_default() {
		let catalog = load_catalog(&super::super::THEME_DIR).expect("catalog");
		let names: Vec<_> = catalog.themes.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["blurple", "light", "slate", "solarized"]);
		assert_eq!(catalog.default_theme, catalog.themes[0].theme);
	}
}
