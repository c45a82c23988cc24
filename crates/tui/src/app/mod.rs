//! The server search palette widget.
//!
//! [`ServerSearch`] owns the dataset, the open/closed state, and the layout
//! of the last frame. Submodules split input handling and rendering.

mod actions;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub use actions::PaletteEvent;
pub use state::{OpenPalette, PaletteState, ServerSearch};
