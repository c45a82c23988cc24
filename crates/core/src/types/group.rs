use std::fmt;

use serde::{Deserialize, Serialize};

use super::Icon;

/// Category of entries a [`SearchGroup`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
	/// Text, voice, or video channels of a server.
	Channel,
	/// Members of a server.
	Member,
}

impl GroupKind {
	/// Stable lowercase identifier used in output formats.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Channel => "channel",
			Self::Member => "member",
		}
	}
}

impl fmt::Display for GroupKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single selectable entry.
///
/// The `id` doubles as the rendering key and is expected to be unique across
/// every group handed to the palette. Duplicates are not detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
	pub id: String,
	#[serde(default)]
	pub icon: Icon,
	pub name: String,
}

impl SearchItem {
	/// Create an item without an icon.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			icon: Icon::none(),
			name: name.into(),
		}
	}

	/// Attach an icon to the item.
	#[must_use]
	pub fn with_icon(mut self, icon: Icon) -> Self {
		self.icon = icon;
		self
	}
}

/// A labelled category of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchGroup {
	/// Heading shown above the group's rows.
	pub label: String,
	#[serde(rename = "type")]
	pub kind: GroupKind,
	/// Entries of the group. `None` and `Some(vec![])` are treated alike.
	#[serde(default)]
	pub items: Option<Vec<SearchItem>>,
}

impl SearchGroup {
	/// Create a group with no items.
	#[must_use]
	pub fn new(label: impl Into<String>, kind: GroupKind) -> Self {
		Self {
			label: label.into(),
			kind,
			items: None,
		}
	}

	/// Replace the group's items.
	#[must_use]
	pub fn with_items(mut self, items: Vec<SearchItem>) -> Self {
		self.items = Some(items);
		self
	}

	/// Items of the group, empty when none were supplied.
	#[must_use]
	pub fn items(&self) -> &[SearchItem] {
		self.items.as_deref().unwrap_or_default()
	}

	/// Whether the group has anything to render.
	#[must_use]
	pub fn has_items(&self) -> bool {
		!self.items().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absent_and_empty_items_both_report_no_items() {
		let absent = SearchGroup::new("Members", GroupKind::Member);
		let empty = SearchGroup::new("Members", GroupKind::Member).with_items(Vec::new());

		assert!(!absent.has_items());
		assert!(!empty.has_items());
		assert!(absent.items().is_empty());
	}

	#[test]
	fn group_type_uses_lowercase_wire_names() {
		let group: SearchGroup = serde_json::from_str(
			r#"{"label":"Text Channels","type":"channel","items":[{"id":"1","name":"general"}]}"#,
		)
		.expect("parse group");

		assert_eq!(group.kind, GroupKind::Channel);
		assert_eq!(group.items()[0].icon, Icon::none());
		assert_eq!(group.items()[0].name, "general");
	}

	#[test]
	fn null_items_deserialize_as_absent() {
		let group: SearchGroup =
			serde_json::from_str(r#"{"label":"Members","type":"member","items":null}"#)
				.expect("parse group");

		assert_eq!(group.items, None);
	}
}
