use serde::{Deserialize, Serialize};

/// Opaque handle for the glyph drawn beside a search item.
///
/// Known names (`hash`, `mic`, `video`, `shield-check`, `shield-alert`) map
/// to fixed terminal glyphs. Anything else is drawn as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Icon {
	name: String,
}

impl Icon {
	pub const HASH: &'static str = "hash";
	pub const MIC: &'static str = "mic";
	pub const VIDEO: &'static str = "video";
	pub const SHIELD_CHECK: &'static str = "shield-check";
	pub const SHIELD_ALERT: &'static str = "shield-alert";

	/// An icon that renders nothing.
	#[must_use]
	pub fn none() -> Self {
		Self::default()
	}

	/// Create an icon from a known name or a literal glyph.
	#[must_use]
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into().trim().to_string(),
		}
	}

	#[must_use]
	pub fn hash() -> Self {
		Self::named(Self::HASH)
	}

	#[must_use]
	pub fn mic() -> Self {
		Self::named(Self::MIC)
	}

	#[must_use]
	pub fn video() -> Self {
		Self::named(Self::VIDEO)
	}

	#[must_use]
	pub fn shield_check() -> Self {
		Self::named(Self::SHIELD_CHECK)
	}

	#[must_use]
	pub fn shield_alert() -> Self {
		Self::named(Self::SHIELD_ALERT)
	}

	/// The name this icon was created with.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.name.is_empty()
	}

	/// Glyph to draw in the terminal.
	#[must_use]
	pub fn glyph(&self) -> &str {
		match self.name.as_str() {
			Self::HASH => "#",
			Self::MIC => "♪",
			Self::VIDEO => "◉",
			Self::SHIELD_CHECK => "✔",
			Self::SHIELD_ALERT => "⚠",
			other => other,
		}
	}
}

impl From<String> for Icon {
	fn from(name: String) -> Self {
		Self::named(name)
	}
}

impl From<&str> for Icon {
	fn from(name: &str) -> Self {
		Self::named(name)
	}
}

impl From<Icon> for String {
	fn from(icon: Icon) -> Self {
		icon.name
	}
}
