//! Search a chat server's channels and members from the terminal.
//!
//! The root crate re-exports the data model from `server-search-core` and the
//! palette from `server-search-tui`, and adds the application plumbing shared
//! by the binary: platform directories and logging.

pub mod app_dirs;
pub mod logging;

pub use server_search_core::{
	Dataset, DatasetError, GroupKind, Icon, SearchGroup, SearchItem, SearchOutcome,
	SearchSelection, ServerInfo, ServerProfile, filter_groups, route_for,
};
pub use server_search_tui::{
	PaletteLabels, RunOptions, ServerSearch, Theme, ThemeDescriptor, by_name as theme_by_name,
	default_theme, descriptors as theme_descriptors, names as theme_names, run,
};
