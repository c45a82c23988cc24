use serde::Serialize;

use super::{GroupKind, SearchGroup, SearchItem};

/// The entry a user picked from the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSelection {
	pub id: String,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: GroupKind,
	/// Label of the group the entry was listed under.
	pub group: String,
}

impl SearchSelection {
	/// Capture `item` as listed under `group`.
	#[must_use]
	pub fn from_item(group: &SearchGroup, item: &SearchItem) -> Self {
		Self {
			id: item.id.clone(),
			name: item.name.clone(),
			kind: group.kind,
			group: group.label.clone(),
		}
	}
}

/// Result returned when an interactive session finishes.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
	/// `true` when the session ended with a selection.
	pub accepted: bool,
	pub selection: Option<SearchSelection>,
	/// Query text at the time of the selection.
	pub query: String,
}

impl SearchOutcome {
	/// Outcome for a session the user left without picking anything.
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			selection: None,
			query: query.into(),
		}
	}

	/// Outcome for a session that ended with `selection`.
	#[must_use]
	pub fn selected(selection: SearchSelection, query: impl Into<String>) -> Self {
		Self {
			accepted: true,
			selection: Some(selection),
			query: query.into(),
		}
	}
}
