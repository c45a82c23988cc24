//! Data model and matching primitives for the `server-search` palette.
//!
//! Callers describe a chat server as a list of [`SearchGroup`]s (or a
//! [`ServerProfile`] that expands into them), filter the groups against a
//! query with [`filter_groups`], and turn the picked entry into a route.

pub mod dataset;
mod error;
pub mod filter;
pub mod route;
pub mod server;
pub mod types;

pub use crate::dataset::Dataset;
pub use crate::error::DatasetError;
pub use crate::filter::{ResultsView, VisibleGroup, filter_groups};
pub use crate::route::route_for;
pub use crate::server::{Channel, ChannelType, Member, MemberRole, ServerInfo, ServerProfile};
pub use crate::types::{GroupKind, Icon, SearchGroup, SearchItem, SearchOutcome, SearchSelection};
