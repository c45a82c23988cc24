//! Overlay surface that hosts the query input and results.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::style::Theme;

pub(crate) const DIALOG_MAX_WIDTH: u16 = 64;
pub(crate) const DIALOG_MAX_HEIGHT: u16 = 20;

/// Centered dialog rectangle inside `area`, leaving a small margin.
#[must_use]
pub fn dialog_area(area: Rect) -> Rect {
	let width = area.width.saturating_sub(4).min(DIALOG_MAX_WIDTH);
	let height = area.height.saturating_sub(2).min(DIALOG_MAX_HEIGHT);

	let [row] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	let [dialog] = Layout::horizontal([Constraint::Length(width)])
		.flex(Flex::Center)
		.areas(row);
	dialog
}

/// Clear `area`, draw the bordered dialog frame, and return its inner area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if !title.is_empty() {
		block = block.title(Span::styled(format!(" {title} "), theme.header));
	}

	let inner = block.inner(area);
	frame.render_widget(Clear, area);
	frame.render_widget(block, area);
	inner
}

/// Horizontal rule between the input and the results.
pub fn render_divider(frame: &mut Frame, area: Rect, theme: &Theme) {
	let width = usize::from(area.width);
	if width == 0 {
		return;
	}
	let rule = Line::from(Span::styled("─".repeat(width), theme.border_style()));
	frame.render_widget(Paragraph::new(rule), area);
}
