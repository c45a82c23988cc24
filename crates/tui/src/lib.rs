//! Terminal command palette for searching a chat server's channels and
//! members.
//!
//! [`ServerSearch`] is the widget: a trigger line that opens a dialog with a
//! query input and grouped, filterable results. [`run`] hosts it in a full
//! screen event loop.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{OpenPalette, PaletteEvent, PaletteState, ServerSearch};
pub use config::PaletteLabels;
pub use runtime::{RunOptions, run};

pub use crate::input::QueryInput;
pub use crate::style::{
	StyleConfig, Theme, ThemeDescriptor, builtin_themes, by_name, default_theme, descriptors, names,
};
