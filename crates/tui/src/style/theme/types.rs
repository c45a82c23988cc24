use ratatui::style::{Color, Style};

/// Styles for the five parts of the palette a theme controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Group headings.
	pub header: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Trigger label and query text.
	pub prompt: Style,
	/// Placeholders, hints, and the empty state.
	pub empty: Style,
	/// Icons and the cursor marker.
	pub highlight: Style,
}

impl Theme {
	/// Dialog and divider borders take the heading colour.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// The shortcut badge on the trigger: muted text on the highlight row colour.
	#[must_use]
	pub fn shortcut_style(&self) -> Style {
		Style::new()
			.fg(self.empty.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}
}

/// A bundled theme with the names it answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
	pub name: String,
	/// Alternate names, sorted.
	pub aliases: Vec<String>,
	pub theme: Theme,
}
