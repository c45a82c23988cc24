use ratatui::layout::Rect;
use server_search_core::{Dataset, ResultsView, SearchSelection, filter_groups};

use crate::components::RowHit;
use crate::config::PaletteLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

type SelectHandler<'a> = Box<dyn FnMut(&SearchSelection) + 'a>;

/// Transient state of an open dialog.
pub struct OpenPalette {
	pub(crate) input: QueryInput,
	/// Flat index of the highlighted item.
	pub(crate) cursor: usize,
	/// First visible line of the results viewport.
	pub(crate) offset: usize,
}

impl OpenPalette {
	fn new(labels: &PaletteLabels, theme: &Theme) -> Self {
		let mut input = QueryInput::default();
		input.set_placeholder(labels.placeholder.as_str(), theme.empty);
		input.set_style(theme.prompt);
		Self {
			input,
			cursor: 0,
			offset: 0,
		}
	}

	/// Current query text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}
}

/// Whether the search dialog is showing.
pub enum PaletteState {
	Closed,
	Open(OpenPalette),
}

/// Screen areas recorded during the last render, used for mouse hits.
#[derive(Debug, Default)]
pub(crate) struct Hitboxes {
	pub(crate) trigger: Option<Rect>,
	pub(crate) dialog: Option<Rect>,
	pub(crate) rows: Vec<RowHit>,
}

/// Command palette listing a server's channels and members.
///
/// Starts closed. Activating the trigger (or `Ctrl+K`) opens the dialog;
/// `Esc`, a click outside the dialog, or picking an entry closes it.
pub struct ServerSearch<'a> {
	pub(crate) dataset: Dataset,
	pub(crate) state: PaletteState,
	pub(crate) labels: PaletteLabels,
	pub(crate) style: StyleConfig,
	pub(crate) hitboxes: Hitboxes,
	on_select: Option<SelectHandler<'a>>,
}

impl<'a> ServerSearch<'a> {
	/// Create a closed palette over `dataset`.
	#[must_use]
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			state: PaletteState::Closed,
			labels: PaletteLabels::default(),
			style: StyleConfig::default(),
			hitboxes: Hitboxes::default(),
			on_select: None,
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: PaletteLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.set_theme(theme);
		self
	}

	/// Register the action run whenever an entry is picked.
	#[must_use]
	pub fn on_select(mut self, handler: impl FnMut(&SearchSelection) + 'a) -> Self {
		self.on_select = Some(Box::new(handler));
		self
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	#[must_use]
	pub fn labels(&self) -> &PaletteLabels {
		&self.labels
	}

	#[must_use]
	pub fn state(&self) -> &PaletteState {
		&self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self.state, PaletteState::Open(_))
	}

	/// Query typed into the dialog; empty while closed.
	#[must_use]
	pub fn query(&self) -> &str {
		match &self.state {
			PaletteState::Open(open) => open.query(),
			PaletteState::Closed => "",
		}
	}

	/// Flat index of the highlighted item while open.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		match &self.state {
			PaletteState::Open(open) => Some(open.cursor),
			PaletteState::Closed => None,
		}
	}

	/// Groups and items visible for the current query.
	#[must_use]
	pub fn results(&self) -> ResultsView<'_> {
		filter_groups(&self.dataset.groups, self.query())
	}

	/// Entry under the cursor, if the dialog is open and has results.
	#[must_use]
	pub fn highlighted(&self) -> Option<SearchSelection> {
		let cursor = self.cursor()?;
		self.results().selection_at(cursor)
	}

	/// Open the dialog from the trigger. Returns `false` when already open.
	pub fn activate_trigger(&mut self) -> bool {
		if self.is_open() {
			return false;
		}
		self.state = PaletteState::Open(OpenPalette::new(&self.labels, &self.style.theme));
		tracing::debug!(
			groups = self.dataset.groups.len(),
			items = self.dataset.item_count(),
			"search dialog opened"
		);
		true
	}

	/// Close the dialog. Returns `false` when already closed.
	pub fn dismiss(&mut self) -> bool {
		if !self.is_open() {
			return false;
		}
		self.state = PaletteState::Closed;
		self.hitboxes.dialog = None;
		self.hitboxes.rows.clear();
		tracing::debug!("search dialog closed");
		true
	}

	/// Flip between open and closed.
	pub fn toggle(&mut self) -> bool {
		if self.is_open() {
			self.dismiss();
			false
		} else {
			self.activate_trigger()
		}
	}

	/// Pick the highlighted entry: run the select handler and close.
	pub(crate) fn select_highlighted(&mut self) -> Option<SearchSelection> {
		let selection = self.highlighted()?;
		tracing::info!(
			id = %selection.id,
			kind = %selection.kind,
			group = %selection.group,
			"entry selected"
		);
		if let Some(handler) = self.on_select.as_mut() {
			handler(&selection);
		}
		self.dismiss();
		Some(selection)
	}
}
