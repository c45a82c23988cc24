//! Query filtering over search groups.
//!
//! Matching follows a command-list contract: every query character has to
//! appear in the item name, in order. Matching items are ranked by score
//! within their group, groups keep their input order, and groups left
//! without items disappear.

use std::cmp::Reverse;

use frizbee::{Config, match_list};

use crate::types::{GroupKind, SearchGroup, SearchItem, SearchSelection};

/// Scoring options. Every candidate reaching the matcher already passed the
/// subsequence check, so frizbee only ranks and must not drop anything.
fn scoring_config() -> Config {
	Config {
		prefilter: false,
		max_typos: None,
		sort: false,
		..Config::default()
	}
}

/// A group that still has visible items after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleGroup<'a> {
	pub group: &'a SearchGroup,
	/// Visible items in render order.
	pub items: Vec<&'a SearchItem>,
}

impl<'a> VisibleGroup<'a> {
	#[must_use]
	pub fn label(&self) -> &'a str {
		&self.group.label
	}

	#[must_use]
	pub fn kind(&self) -> GroupKind {
		self.group.kind
	}
}

/// Filtered, render-ready view of a set of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView<'a> {
	groups: Vec<VisibleGroup<'a>>,
}

impl<'a> ResultsView<'a> {
	#[must_use]
	pub fn groups(&self) -> &[VisibleGroup<'a>] {
		&self.groups
	}

	/// `true` when no group has a visible item.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Number of visible items across all groups.
	#[must_use]
	pub fn item_count(&self) -> usize {
		self.groups.iter().map(|group| group.items.len()).sum()
	}

	/// Item at `index` when items are counted across groups in render order.
	#[must_use]
	pub fn item_at(&self, index: usize) -> Option<(&'a SearchGroup, &'a SearchItem)> {
		let mut remaining = index;
		for visible in &self.groups {
			if let Some(&item) = visible.items.get(remaining) {
				return Some((visible.group, item));
			}
			remaining -= visible.items.len();
		}
		None
	}

	/// Selection describing the item at `index`.
	#[must_use]
	pub fn selection_at(&self, index: usize) -> Option<SearchSelection> {
		self.item_at(index)
			.map(|(group, item)| SearchSelection::from_item(group, item))
	}

	/// Ids of every visible item in render order.
	#[must_use]
	pub fn rendered_keys(&self) -> Vec<&'a str> {
		self.groups
			.iter()
			.flat_map(|group| group.items.iter().map(|&item| item.id.as_str()))
			.collect()
	}
}

/// Filter `groups` against `query`.
///
/// Groups with no items are skipped whatever the query. Whitespace in the
/// query is ignored, so an empty or whitespace-only query keeps every item
/// in input order.
#[must_use]
pub fn filter_groups<'a>(groups: &'a [SearchGroup], query: &str) -> ResultsView<'a> {
	let needle = normalize_query(query);
	let populated = groups.iter().filter(|group| group.has_items());

	if needle.is_empty() {
		let groups = populated
			.map(|group| VisibleGroup {
				group,
				items: group.items().iter().collect(),
			})
			.collect();
		return ResultsView { groups };
	}

	let config = scoring_config();
	let groups = populated
		.filter_map(|group| {
			let items = rank_items(&needle, group.items(), &config);
			(!items.is_empty()).then_some(VisibleGroup { group, items })
		})
		.collect();
	ResultsView { groups }
}

/// Lowercase the query and drop its whitespace.
fn normalize_query(query: &str) -> String {
	query
		.chars()
		.filter(|ch| !ch.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

fn rank_items<'a>(needle: &str, items: &'a [SearchItem], config: &Config) -> Vec<&'a SearchItem> {
	let candidates: Vec<&SearchItem> = items
		.iter()
		.filter(|item| contains_in_order(needle, &item.name))
		.collect();
	if candidates.is_empty() {
		return candidates;
	}

	let haystacks: Vec<&str> = candidates.iter().map(|item| item.name.as_str()).collect();
	let mut scores = vec![0u16; candidates.len()];
	for entry in match_list(needle, &haystacks, config) {
		if let Some(score) = scores.get_mut(entry.index as usize) {
			*score = entry.score;
		}
	}

	let mut ranked: Vec<(usize, u16)> = scores.into_iter().enumerate().collect();
	ranked.sort_unstable_by_key(|&(index, score)| (Reverse(score), index));
	ranked
		.into_iter()
		.map(|(index, _)| candidates[index])
		.collect()
}

/// Whether every char of the normalised `needle` appears in `haystack` in
/// order, ignoring case.
fn contains_in_order(needle: &str, haystack: &str) -> bool {
	let mut remaining = haystack.chars().flat_map(char::to_lowercase);
	needle.chars().all(|wanted| remaining.any(|ch| ch == wanted))
}
