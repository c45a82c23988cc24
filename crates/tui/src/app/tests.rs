use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use server_search_core::{Dataset, GroupKind, SearchGroup, SearchItem};

use super::*;

fn dataset() -> Dataset {
	Dataset::new(vec![
		SearchGroup::new("Text Channels", GroupKind::Channel).with_items(vec![
			SearchItem::new("1", "general"),
			SearchItem::new("2", "random"),
		]),
		SearchGroup::new("Voice Channels", GroupKind::Channel),
		SearchGroup::new("Members", GroupKind::Member)
			.with_items(vec![SearchItem::new("m1", "ferris")]),
	])
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(palette: &mut ServerSearch<'_>, text: &str) {
	for ch in text.chars() {
		palette.handle_key(key(KeyCode::Char(ch)));
	}
}

#[test]
fn starts_closed() {
	let palette = ServerSearch::new(dataset());
	assert!(!palette.is_open());
	assert_eq!(palette.cursor(), None);
	assert_eq!(palette.query(), "");
}

#[test]
fn trigger_opens_exactly_once_per_activation() {
	let mut palette = ServerSearch::new(dataset());

	assert!(palette.activate_trigger());
	assert!(palette.is_open());
	assert!(!palette.activate_trigger(), "already open");
	assert!(palette.is_open());

	assert!(palette.dismiss());
	assert!(!palette.dismiss(), "already closed");
	assert!(palette.activate_trigger());
}

#[test]
fn ctrl_k_toggles_and_escape_dismisses() {
	let mut palette = ServerSearch::new(dataset());

	assert_eq!(palette.handle_key(ctrl('k')), PaletteEvent::Opened);
	assert_eq!(palette.handle_key(ctrl('k')), PaletteEvent::Closed);
	assert_eq!(palette.handle_key(key(KeyCode::Enter)), PaletteEvent::Opened);
	assert_eq!(palette.handle_key(key(KeyCode::Esc)), PaletteEvent::Closed);
	assert!(!palette.is_open());
}

#[test]
fn keys_are_ignored_while_closed() {
	let mut palette = ServerSearch::new(dataset());
	assert_eq!(palette.handle_key(key(KeyCode::Char('g'))), PaletteEvent::Ignored);
	assert_eq!(palette.handle_key(key(KeyCode::Down)), PaletteEvent::Ignored);
}

#[test]
fn reopening_starts_with_an_empty_query() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();
	type_text(&mut palette, "gen");
	assert_eq!(palette.query(), "gen");

	palette.dismiss();
	palette.activate_trigger();
	assert_eq!(palette.query(), "");
	assert_eq!(palette.cursor(), Some(0));
}

#[test]
fn cursor_moves_across_groups_and_clamps() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();

	assert_eq!(palette.handle_key(key(KeyCode::Up)), PaletteEvent::Ignored);
	assert_eq!(palette.handle_key(key(KeyCode::Down)), PaletteEvent::CursorMoved);
	assert_eq!(palette.handle_key(ctrl('n')), PaletteEvent::CursorMoved);
	assert_eq!(palette.cursor(), Some(2));
	assert_eq!(palette.handle_key(key(KeyCode::Down)), PaletteEvent::Ignored);

	let highlighted = palette.highlighted().expect("highlighted entry");
	assert_eq!(highlighted.id, "m1");
	assert_eq!(highlighted.kind, GroupKind::Member);

	assert_eq!(palette.handle_key(ctrl('p')), PaletteEvent::CursorMoved);
	assert_eq!(palette.cursor(), Some(1));
}

#[test]
fn typing_filters_and_resets_cursor() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();
	palette.handle_key(key(KeyCode::Down));

	assert_eq!(
		palette.handle_key(key(KeyCode::Char('f'))),
		PaletteEvent::QueryChanged
	);
	assert_eq!(palette.cursor(), Some(0));
	assert_eq!(palette.results().rendered_keys(), ["m1"]);
}

#[test]
fn enter_selects_runs_handler_and_closes() {
	let mut picked = Vec::new();
	{
		let mut palette =
			ServerSearch::new(dataset()).on_select(|selection| picked.push(selection.id.clone()));
		palette.activate_trigger();
		palette.handle_key(key(KeyCode::Down));

		let event = palette.handle_key(key(KeyCode::Enter));
		let PaletteEvent::Selected(selection) = event else {
			panic!("expected a selection, got {event:?}");
		};
		assert_eq!(selection.name, "random");
		assert_eq!(selection.group, "Text Channels");
		assert!(!palette.is_open());
	}
	assert_eq!(picked, ["2"]);
}

#[test]
fn enter_without_results_keeps_dialog_open() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();
	type_text(&mut palette, "zzz");

	assert!(palette.results().is_empty());
	assert_eq!(palette.handle_key(key(KeyCode::Enter)), PaletteEvent::Ignored);
	assert!(palette.is_open());
}

#[test]
fn clicking_the_trigger_opens() {
	let mut palette = ServerSearch::new(dataset());
	palette.hitboxes.trigger = Some(Rect::new(0, 0, 20, 1));

	assert_eq!(palette.handle_mouse(click(30, 0)), PaletteEvent::Ignored);
	assert_eq!(palette.handle_mouse(click(5, 0)), PaletteEvent::Opened);
	assert!(palette.is_open());
}

#[test]
fn clicking_outside_the_dialog_dismisses() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();
	palette.hitboxes.dialog = Some(Rect::new(10, 5, 20, 10));

	assert_eq!(palette.handle_mouse(click(12, 6)), PaletteEvent::Ignored);
	assert!(palette.is_open());
	assert_eq!(palette.handle_mouse(click(1, 1)), PaletteEvent::Closed);
	assert!(!palette.is_open());
}

#[test]
fn clicking_a_row_selects_it() {
	let mut palette = ServerSearch::new(dataset());
	palette.activate_trigger();
	palette.hitboxes.dialog = Some(Rect::new(0, 0, 40, 10));
	palette.hitboxes.rows = vec![crate::components::RowHit {
		area: Rect::new(1, 4, 38, 1),
		index: 2,
	}];

	let event = palette.handle_mouse(click(8, 4));
	let PaletteEvent::Selected(selection) = event else {
		panic!("expected a selection, got {event:?}");
	};
	assert_eq!(selection.id, "m1");
	assert!(!palette.is_open());
}
