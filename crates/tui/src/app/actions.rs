use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use server_search_core::SearchSelection;

use super::{PaletteState, ServerSearch};
use crate::components::point_in_rect;

/// What a single input event did to the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
	/// The event had no effect.
	Ignored,
	Opened,
	Closed,
	QueryChanged,
	CursorMoved,
	/// An entry was picked and the dialog closed.
	Selected(SearchSelection),
}

impl ServerSearch<'_> {
	/// Process a keyboard event.
	pub fn handle_key(&mut self, key: KeyEvent) -> PaletteEvent {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		if ctrl && key.code == KeyCode::Char('k') {
			return if self.toggle() {
				PaletteEvent::Opened
			} else {
				PaletteEvent::Closed
			};
		}

		if !self.is_open() {
			return match key.code {
				KeyCode::Enter if self.activate_trigger() => PaletteEvent::Opened,
				_ => PaletteEvent::Ignored,
			};
		}

		match key.code {
			KeyCode::Esc => {
				self.dismiss();
				PaletteEvent::Closed
			}
			KeyCode::Enter => self
				.select_highlighted()
				.map_or(PaletteEvent::Ignored, PaletteEvent::Selected),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Char('p') if ctrl => self.move_cursor_up(),
			KeyCode::Char('n') if ctrl => self.move_cursor_down(),
			_ => self.edit_query(key),
		}
	}

	/// Process a mouse event.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> PaletteEvent {
		let (column, row) = (mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) if !self.is_open() => {
				let on_trigger = self
					.hitboxes
					.trigger
					.is_some_and(|area| point_in_rect(column, row, area));
				if on_trigger && self.activate_trigger() {
					PaletteEvent::Opened
				} else {
					PaletteEvent::Ignored
				}
			}
			MouseEventKind::Down(MouseButton::Left) => {
				let hit = self
					.hitboxes
					.rows
					.iter()
					.find(|hit| point_in_rect(column, row, hit.area))
					.map(|hit| hit.index);
				if let Some(index) = hit {
					self.set_cursor(index);
					return self
						.select_highlighted()
						.map_or(PaletteEvent::Ignored, PaletteEvent::Selected);
				}

				let inside = self
					.hitboxes
					.dialog
					.is_some_and(|area| point_in_rect(column, row, area));
				if inside {
					PaletteEvent::Ignored
				} else {
					self.dismiss();
					PaletteEvent::Closed
				}
			}
			MouseEventKind::ScrollUp if self.is_open() => self.move_cursor_up(),
			MouseEventKind::ScrollDown if self.is_open() => self.move_cursor_down(),
			_ => PaletteEvent::Ignored,
		}
	}

	fn move_cursor_up(&mut self) -> PaletteEvent {
		match self.cursor() {
			Some(cursor) if cursor > 0 => {
				self.set_cursor(cursor - 1);
				PaletteEvent::CursorMoved
			}
			_ => PaletteEvent::Ignored,
		}
	}

	fn move_cursor_down(&mut self) -> PaletteEvent {
		let len = self.results().item_count();
		match self.cursor() {
			Some(cursor) if cursor + 1 < len => {
				self.set_cursor(cursor + 1);
				PaletteEvent::CursorMoved
			}
			_ => PaletteEvent::Ignored,
		}
	}

	fn set_cursor(&mut self, index: usize) {
		if let PaletteState::Open(open) = &mut self.state {
			open.cursor = index;
		}
	}

	fn edit_query(&mut self, key: KeyEvent) -> PaletteEvent {
		let PaletteState::Open(open) = &mut self.state else {
			return PaletteEvent::Ignored;
		};
		if !open.input.input(key) {
			return PaletteEvent::Ignored;
		}
		open.cursor = 0;
		open.offset = 0;
		tracing::trace!(query = open.input.text(), "query changed");
		PaletteEvent::QueryChanged
	}
}
