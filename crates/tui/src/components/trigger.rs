//! The always-visible control that opens the palette.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::PaletteLabels;
use crate::style::Theme;

pub(crate) const SEARCH_GLYPH: &str = "⌕";

/// Inputs for [`render_trigger`].
pub struct TriggerContext<'a> {
	pub labels: &'a PaletteLabels,
	pub theme: &'a Theme,
	/// Whether the dialog is currently open.
	pub active: bool,
}

/// Build the trigger line: search glyph, label, and a right-aligned shortcut
/// badge. The badge is dropped when it does not fit in `width`.
#[must_use]
pub fn trigger_line<'a>(ctx: &TriggerContext<'a>, width: u16) -> Line<'a> {
	let mut label_style = ctx.theme.prompt;
	if ctx.active {
		label_style = label_style.add_modifier(Modifier::BOLD);
	}

	let lead = format!(" {SEARCH_GLYPH} ");
	let badge = format!(" {} ", ctx.labels.shortcut_hint);
	let used = lead.width() + ctx.labels.trigger_label.width();

	let mut spans = vec![
		Span::styled(lead, ctx.theme.highlight),
		Span::styled(ctx.labels.trigger_label.as_str(), label_style),
	];

	let available = usize::from(width);
	if !ctx.labels.shortcut_hint.is_empty() && used + badge.width() < available {
		let gap = available - used - badge.width();
		spans.push(Span::raw(" ".repeat(gap)));
		spans.push(Span::styled(badge, ctx.theme.shortcut_style()));
	}

	Line::from(spans)
}

/// Render the trigger into a single-row `area`.
pub fn render_trigger(frame: &mut Frame, area: Rect, ctx: TriggerContext<'_>) {
	let line = trigger_line(&ctx, area.width);
	frame.render_widget(Paragraph::new(line), area);
}
