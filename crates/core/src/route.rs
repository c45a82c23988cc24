//! Navigation targets for picked entries.

use crate::types::{GroupKind, SearchSelection};

/// Path the application navigates to when `selection` is picked inside
/// server `server_id`. Channels open the channel view; members open a direct
/// conversation.
#[must_use]
pub fn route_for(server_id: &str, selection: &SearchSelection) -> String {
	let segment = match selection.kind {
		GroupKind::Channel => "channels",
		GroupKind::Member => "conversations",
	};
	format!("/servers/{server_id}/{segment}/{}", selection.id)
}
