//! Chat-server description that expands into the standard search groups.

use serde::{Deserialize, Serialize};

use crate::types::{GroupKind, Icon, SearchGroup, SearchItem};

pub const TEXT_CHANNELS_LABEL: &str = "Text Channels";
pub const VOICE_CHANNELS_LABEL: &str = "Voice Channels";
pub const VIDEO_CHANNELS_LABEL: &str = "Video Channels";
pub const MEMBERS_LABEL: &str = "Members";

/// Identity of the server the palette is searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
	pub id: String,
	pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
	#[default]
	#[serde(rename = "TEXT", alias = "text")]
	Text,
	#[serde(rename = "AUDIO", alias = "audio", alias = "voice")]
	Audio,
	#[serde(rename = "VIDEO", alias = "video")]
	Video,
}

impl ChannelType {
	#[must_use]
	pub fn icon(self) -> Icon {
		match self {
			Self::Text => Icon::hash(),
			Self::Audio => Icon::mic(),
			Self::Video => Icon::video(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
	#[default]
	#[serde(rename = "GUEST", alias = "guest")]
	Guest,
	#[serde(rename = "MODERATOR", alias = "moderator")]
	Moderator,
	#[serde(rename = "ADMIN", alias = "admin")]
	Admin,
}

impl MemberRole {
	/// Badge drawn next to a member. Guests carry none.
	#[must_use]
	pub fn icon(self) -> Icon {
		match self {
			Self::Guest => Icon::none(),
			Self::Moderator => Icon::shield_check(),
			Self::Admin => Icon::shield_alert(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
	pub id: String,
	pub name: String,
	#[serde(rename = "type", default)]
	pub kind: ChannelType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub role: MemberRole,
}

/// Channels and members of one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProfile {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub channels: Vec<Channel>,
	#[serde(default)]
	pub members: Vec<Member>,
}

impl ServerProfile {
	#[must_use]
	pub fn info(&self) -> ServerInfo {
		ServerInfo {
			id: self.id.clone(),
			name: self.name.clone(),
		}
	}

	/// Build the text, voice, video, and member groups in display order.
	///
	/// Every group is returned even when empty; the palette skips empty
	/// groups when rendering.
	#[must_use]
	pub fn search_groups(&self) -> Vec<SearchGroup> {
		let channel_group = |label: &str, kind: ChannelType| {
			let items = self
				.channels
				.iter()
				.filter(|channel| channel.kind == kind)
				.map(|channel| SearchItem::new(&channel.id, &channel.name).with_icon(kind.icon()))
				.collect();
			SearchGroup::new(label, GroupKind::Channel).with_items(items)
		};

		let members = self
			.members
			.iter()
			.map(|member| SearchItem::new(&member.id, &member.name).with_icon(member.role.icon()))
			.collect();

		vec![
			channel_group(TEXT_CHANNELS_LABEL, ChannelType::Text),
			channel_group(VOICE_CHANNELS_LABEL, ChannelType::Audio),
			channel_group(VIDEO_CHANNELS_LABEL, ChannelType::Video),
			SearchGroup::new(MEMBERS_LABEL, GroupKind::Member).with_items(members),
		]
	}
}
