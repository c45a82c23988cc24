//! UI building blocks for the palette.

/// Centered overlay frame and divider.
pub mod dialog;
/// Grouped result rows and the empty state.
pub mod results;
/// Scrollbar for the results viewport.
pub mod scrollbar;
/// Trigger control.
pub mod trigger;

pub use dialog::{dialog_area, render_dialog_frame, render_divider};
pub use results::{
	ResultLine, ResultsContext, RowHit, build_result_lines, cursor_line, render_results,
	scroll_offset,
};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use trigger::{TriggerContext, render_trigger, trigger_line};
