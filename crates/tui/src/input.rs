//! Single-line query input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the palette query.
pub struct QueryInput {
	textarea: TextArea<'static>,
}

impl Default for QueryInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl QueryInput {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Set the placeholder shown while the query is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	/// Set the style of typed text.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map_or("", String::as_str)
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let inserts_newline = key.code == KeyCode::Enter
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if inserts_newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Widget to render for this input.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'static> {
		&self.textarea
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('g'))));
		assert!(input.input(key(KeyCode::Char('e'))));
		assert_eq!(input.text(), "ge");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "g");
	}

	#[test]
	fn line_breaks_are_rejected() {
		let mut input = QueryInput::new("gen");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "gen");
	}
}
