use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use server_search_core::filter_groups;

use super::{PaletteState, ServerSearch};
use crate::components::trigger::SEARCH_GLYPH;
use crate::components::{
	ResultsContext, TriggerContext, build_result_lines, dialog_area, render_dialog_frame,
	render_divider, render_results, render_trigger, scroll_offset,
};

impl ServerSearch<'_> {
	/// Draw the trigger into `trigger_area` and, while open, the dialog
	/// centered over `overlay_area`.
	pub fn render(&mut self, frame: &mut Frame, trigger_area: Rect, overlay_area: Rect) {
		let theme = &self.style.theme;
		self.hitboxes.trigger = Some(trigger_area);
		render_trigger(
			frame,
			trigger_area,
			TriggerContext {
				labels: &self.labels,
				theme,
				active: matches!(self.state, PaletteState::Open(_)),
			},
		);

		let PaletteState::Open(open) = &mut self.state else {
			self.hitboxes.dialog = None;
			self.hitboxes.rows.clear();
			return;
		};

		let dialog = dialog_area(overlay_area);
		let inner = render_dialog_frame(frame, dialog, &self.labels.dialog_title, theme);
		let [input_row, divider_area, results_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Fill(1),
		])
		.areas(inner);

		let [glyph_area, input_area] =
			Layout::horizontal([Constraint::Length(3), Constraint::Fill(1)]).areas(input_row);
		frame.render_widget(
			Paragraph::new(Span::styled(format!(" {SEARCH_GLYPH} "), theme.highlight)),
			glyph_area,
		);
		frame.render_widget(open.input.widget(), input_area);
		render_divider(frame, divider_area, theme);

		let view = filter_groups(&self.dataset.groups, open.input.text());
		let lines = build_result_lines(&view);
		open.offset = scroll_offset(
			&lines,
			open.cursor,
			open.offset,
			usize::from(results_area.height),
		);

		let rows = render_results(
			frame,
			results_area,
			ResultsContext {
				lines: &lines,
				cursor: open.cursor,
				offset: open.offset,
				empty_label: &self.labels.empty_label,
				theme,
			},
		);

		self.hitboxes.dialog = Some(dialog);
		self.hitboxes.rows = rows;
	}
}
