//! Grouped result rows and the empty state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use server_search_core::{ResultsView, SearchItem};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const ROW_INDENT: &str = "  ";

/// One line of the results viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLine<'a> {
	/// Group heading.
	Heading(&'a str),
	/// Selectable entry; `index` counts items across all groups.
	Item { index: usize, item: &'a SearchItem },
}

/// Screen row occupied by an item, used for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
	pub area: Rect,
	pub index: usize,
}

/// Flatten a filtered view into heading and item lines.
#[must_use]
pub fn build_result_lines<'a>(view: &ResultsView<'a>) -> Vec<ResultLine<'a>> {
	let mut lines = Vec::with_capacity(view.groups().len() + view.item_count());
	let mut index = 0;
	for group in view.groups() {
		lines.push(ResultLine::Heading(group.label()));
		for &item in &group.items {
			lines.push(ResultLine::Item { index, item });
			index += 1;
		}
	}
	lines
}

/// Line position of the item with flat index `cursor`.
#[must_use]
pub fn cursor_line(lines: &[ResultLine<'_>], cursor: usize) -> Option<usize> {
	lines
		.iter()
		.position(|line| matches!(line, ResultLine::Item { index, .. } if *index == cursor))
}

/// Scroll offset that keeps the cursor line visible in a viewport of
/// `height` lines. A group's first item pulls its heading into view.
#[must_use]
pub fn scroll_offset(lines: &[ResultLine<'_>], cursor: usize, offset: usize, height: usize) -> usize {
	let metrics = ScrollMetrics::compute(lines.len(), height);
	let Some(line) = cursor_line(lines, cursor) else {
		return offset.min(metrics.max_scroll);
	};

	let top = match line.checked_sub(1).and_then(|prev| lines.get(prev)) {
		Some(ResultLine::Heading(_)) => line - 1,
		_ => line,
	};

	let offset = if top < offset {
		top
	} else if line >= offset + metrics.viewport_len {
		line + 1 - metrics.viewport_len
	} else {
		offset
	};
	offset.min(metrics.max_scroll)
}

/// Inputs for [`render_results`].
pub struct ResultsContext<'a> {
	pub lines: &'a [ResultLine<'a>],
	pub cursor: usize,
	pub offset: usize,
	pub empty_label: &'a str,
	pub theme: &'a Theme,
}

/// Render the results viewport. Returns the screen rows of visible items.
pub fn render_results(frame: &mut Frame, area: Rect, ctx: ResultsContext<'_>) -> Vec<RowHit> {
	if area.height == 0 || area.width == 0 {
		return Vec::new();
	}

	if ctx.lines.is_empty() {
		let empty = Paragraph::new(Span::styled(ctx.empty_label, ctx.theme.empty))
			.alignment(Alignment::Center);
		let message = Rect {
			y: area.y + area.height.saturating_sub(1).min(1),
			height: 1,
			..area
		};
		frame.render_widget(empty, message);
		return Vec::new();
	}

	let metrics = ScrollMetrics::compute(ctx.lines.len(), usize::from(area.height));
	let content = if metrics.needs_scrollbar {
		render_scrollbar(frame, area, metrics, ctx.offset, ctx.theme)
	} else {
		area
	};

	let mut hits = Vec::new();
	let visible = ctx.lines.iter().skip(ctx.offset).take(metrics.viewport_len);
	for (row, line) in (0u16..).zip(visible) {
		let row_area = Rect {
			y: content.y + row,
			height: 1,
			..content
		};
		let rendered = match *line {
			ResultLine::Heading(label) => heading_line(label, ctx.theme),
			ResultLine::Item { index, item } => {
				hits.push(RowHit {
					area: row_area,
					index,
				});
				item_line(item, index == ctx.cursor, content.width, ctx.theme)
			}
		};
		frame.render_widget(Paragraph::new(rendered), row_area);
	}
	hits
}

fn heading_line<'a>(label: &'a str, theme: &Theme) -> Line<'a> {
	Line::from(vec![Span::raw(" "), Span::styled(label, theme.header)])
}

fn item_line<'a>(item: &'a SearchItem, selected: bool, width: u16, theme: &Theme) -> Line<'a> {
	let marker = if selected { HIGHLIGHT_SYMBOL } else { ROW_INDENT };
	let mut spans = vec![Span::styled(marker, theme.highlight)];
	let mut used = marker.width();

	let glyph = item.icon.glyph();
	if !glyph.is_empty() {
		spans.push(Span::styled(format!("{glyph} "), theme.highlight));
		used += glyph.width() + 1;
	}

	let available = usize::from(width).saturating_sub(used);
	let (name, _) = item.name.as_str().unicode_truncate(available);
	spans.push(Span::raw(name));

	let line = Line::from(spans);
	if selected {
		line.style(theme.row_highlight)
	} else {
		line
	}
}
