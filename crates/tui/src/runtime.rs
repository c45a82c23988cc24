//! Interactive event loop hosting the palette.

use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
	KeyModifiers,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use server_search_core::{Dataset, SearchOutcome};

use crate::app::{PaletteEvent, ServerSearch};
use crate::config::PaletteLabels;
use crate::style::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FALLBACK_TITLE: &str = "server-search";

/// Settings for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
	pub labels: PaletteLabels,
	pub theme: Theme,
	/// Open the dialog immediately instead of waiting for the trigger.
	pub start_open: bool,
}

/// Construct a [`ServerSearch`] for `dataset` and run it to completion.
pub fn run(dataset: Dataset, options: RunOptions) -> Result<SearchOutcome> {
	let mut palette = ServerSearch::new(dataset)
		.with_labels(options.labels)
		.with_theme(options.theme);
	if options.start_open {
		palette.activate_trigger();
	}
	palette.run()
}

impl ServerSearch<'_> {
	/// Take over the terminal until the user picks an entry or quits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		let result = execute!(stdout(), EnableMouseCapture)
			.context("failed to enable mouse capture")
			.and_then(|()| self.event_loop(&mut terminal));

		let disabled = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();

		let outcome = result?;
		disabled.context("failed to disable mouse capture")?;
		Ok(outcome)
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<SearchOutcome> {
		terminal.clear().context("failed to clear terminal")?;

		loop {
			terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw frame")?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}

			let query = self.query().to_string();
			let event = match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if self.is_quit_key(key) {
						tracing::debug!("session cancelled");
						return Ok(SearchOutcome::cancelled(query));
					}
					self.handle_key(key)
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => PaletteEvent::Ignored,
			};

			if let PaletteEvent::Selected(selection) = event {
				return Ok(SearchOutcome::selected(selection, query));
			}
		}
	}

	fn is_quit_key(&self, key: KeyEvent) -> bool {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return true;
		}
		!self.is_open() && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
	}

	/// Draw the full screen: title, trigger, key help, and the dialog.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let content = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [title_area, trigger_area, _, help_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Fill(1),
			Constraint::Length(1),
		])
		.areas(content);

		let theme = self.style.theme;
		let title = self
			.dataset
			.server
			.as_ref()
			.map_or(FALLBACK_TITLE, |server| server.name.as_str());
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(title.to_string(), theme.header))),
			title_area,
		);

		let help = if self.is_open() {
			"↑/↓ move · Enter open · Esc close"
		} else {
			"Ctrl+K search · q quit"
		};
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(help, theme.empty))),
			help_area,
		);

		self.render(frame, trigger_area, area);
	}
}
