use anyhow::{Context, Result};
use server_search::{Dataset, RunOptions, SearchOutcome, ServerInfo, route_for};

use crate::cli::SearchReport;
use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset and running the interactive palette.
pub(crate) struct SearchWorkflow {
	dataset: Dataset,
	options: RunOptions,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			data_path,
			theme,
			labels,
			start_open,
			..
		} = config;

		let dataset = Dataset::from_path(&data_path)
			.with_context(|| format!("failed to load dataset from {}", data_path.display()))?;
		tracing::info!(
			path = %data_path.display(),
			groups = dataset.groups.len(),
			items = dataset.item_count(),
			"dataset loaded"
		);

		let options = RunOptions {
			labels,
			theme,
			start_open,
		};
		Ok(Self { dataset, options })
	}

	pub(crate) fn run(self) -> Result<SearchReport> {
		let Self { dataset, options } = self;
		let server = dataset.server.clone();
		let outcome = server_search::run(dataset, options)?;

		Ok(report(server.as_ref(), outcome))
	}
}

/// Attach the navigation route for the picked entry, when the dataset names
/// its server.
fn report(server: Option<&ServerInfo>, outcome: SearchOutcome) -> SearchReport {
	let route = server
		.zip(outcome.selection.as_ref())
		.map(|(server, selection)| route_for(&server.id, selection));
	if let Some(route) = &route {
		tracing::info!(%route, "selection routed");
	}
	SearchReport { outcome, route }
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use server_search::{GroupKind, PaletteLabels, SearchSelection, default_theme};

	use super::*;
	use server_search::logging::LogSettings;

	fn config(data_path: std::path::PathBuf) -> ResolvedConfig {
		ResolvedConfig {
			data_path,
			theme_name: None,
			theme: default_theme(),
			labels: PaletteLabels::default(),
			start_open: true,
			log: LogSettings::default(),
		}
	}

	fn member_selection() -> SearchSelection {
		SearchSelection {
			id: "m1".into(),
			name: "ferris".into(),
			kind: GroupKind::Member,
			group: "Members".into(),
		}
	}

	#[test]
	fn from_config_loads_the_server_dataset() {
		let mut file = tempfile::Builder::new()
			.suffix(".json")
			.tempfile()
			.expect("temp file");
		write!(
			file,
			r#"{{"server": {{"id": "srv", "name": "Rustaceans", "members": [{{"id": "m1", "name": "ferris"}}]}}}}"#
		)
		.expect("write dataset");

		let workflow = SearchWorkflow::from_config(config(file.path().to_path_buf()))
			.expect("workflow");

		let server = workflow.dataset.server.as_ref().expect("server info");
		assert_eq!(server.id, "srv");
		assert_eq!(workflow.dataset.item_count(), 1);
		assert!(workflow.options.start_open);

		let selection = member_selection();
		let routed = report(Some(server), SearchOutcome::selected(selection, "fer"));
		assert_eq!(routed.route.as_deref(), Some("/servers/srv/conversations/m1"));
	}

	#[test]
	fn missing_dataset_reports_the_path() {
		let err = SearchWorkflow::from_config(config("no/such/servers.json".into()))
			.err()
			.expect("missing file");
		assert!(err.to_string().contains("no/such/servers.json"));
	}

	#[test]
	fn no_route_without_server_or_selection() {
		let server = ServerInfo {
			id: "srv".into(),
			name: "Rustaceans".into(),
		};

		let cancelled = report(Some(&server), SearchOutcome::cancelled("gen"));
		assert_eq!(cancelled.route, None);

		let anonymous = report(None, SearchOutcome::selected(member_selection(), ""));
		assert_eq!(anonymous.route, None);
		assert!(anonymous.outcome.accepted);
	}
}
