//! Loading the groups a palette searches over.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::server::{ServerInfo, ServerProfile};
use crate::types::SearchGroup;

const INLINE_ORIGIN: &str = "<inline>";

/// On-disk shape of a dataset. Explicit `groups` win over the groups a
/// `server` profile would produce.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatasetFile {
	server: Option<ServerProfile>,
	groups: Option<Vec<SearchGroup>>,
}

#[derive(Debug, Clone, Copy)]
enum Format {
	Json,
	Toml,
}

/// Everything the palette needs to render: the groups and, when known, the
/// server they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
	pub server: Option<ServerInfo>,
	pub groups: Vec<SearchGroup>,
}

impl Dataset {
	#[must_use]
	pub fn new(groups: Vec<SearchGroup>) -> Self {
		Self {
			server: None,
			groups,
		}
	}

	#[must_use]
	pub fn with_server(mut self, server: ServerInfo) -> Self {
		self.server = Some(server);
		self
	}

	/// Build the standard groups for a server profile.
	#[must_use]
	pub fn from_profile(profile: &ServerProfile) -> Self {
		Self {
			server: Some(profile.info()),
			groups: profile.search_groups(),
		}
	}

	/// Load a dataset from a `.json` or `.toml` file.
	///
	/// # Errors
	///
	/// Returns [`DatasetError`] when the file cannot be read, has an unknown
	/// extension, fails to parse, or contains no data.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
		let path = path.as_ref();
		let origin = path.display().to_string();
		let format = match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
			Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
			_ => return Err(DatasetError::UnsupportedFormat { origin }),
		};

		let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
			origin: origin.clone(),
			source,
		})?;

		let dataset = parse(&contents, format, origin)?;
		tracing::debug!(
			path = %path.display(),
			groups = dataset.groups.len(),
			items = dataset.item_count(),
			"loaded dataset"
		);
		Ok(dataset)
	}

	/// Parse a JSON document.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::Json`] or [`DatasetError::Empty`].
	pub fn from_json_str(contents: &str) -> Result<Self, DatasetError> {
		parse(contents, Format::Json, INLINE_ORIGIN.to_string())
	}

	/// Parse a TOML document.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::Toml`] or [`DatasetError::Empty`].
	pub fn from_toml_str(contents: &str) -> Result<Self, DatasetError> {
		parse(contents, Format::Toml, INLINE_ORIGIN.to_string())
	}

	/// Total number of items across all groups.
	#[must_use]
	pub fn item_count(&self) -> usize {
		self.groups.iter().map(|group| group.items().len()).sum()
	}
}

fn parse(contents: &str, format: Format, origin: String) -> Result<Dataset, DatasetError> {
	let file: DatasetFile = match format {
		Format::Json => serde_json::from_str(contents).map_err(|source| DatasetError::Json {
			origin: origin.clone(),
			source,
		})?,
		Format::Toml => toml::from_str(contents).map_err(|source| DatasetError::Toml {
			origin: origin.clone(),
			source,
		})?,
	};

	match (file.groups, file.server) {
		(Some(groups), server) => Ok(Dataset {
			server: server.as_ref().map(ServerProfile::info),
			groups,
		}),
		(None, Some(profile)) => Ok(Dataset::from_profile(&profile)),
		(None, None) => Err(DatasetError::Empty { origin }),
	}
}
