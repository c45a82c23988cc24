use anyhow::Result;
use serde_json::json;
use server_search::SearchOutcome;

/// A finished session together with the route of its selection, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchReport {
	pub(crate) outcome: SearchOutcome,
	pub(crate) route: Option<String>,
}

/// Format the plain-text line printed for a finished session.
pub(crate) fn format_plain(report: &SearchReport) -> String {
	let outcome = &report.outcome;
	if !outcome.accepted {
		return "Search cancelled".to_string();
	}

	match (&outcome.selection, &report.route) {
		(Some(_), Some(route)) => route.clone(),
		(Some(selection), None) => {
			format!("{}\t{}\t{}", selection.kind, selection.id, selection.name)
		}
		(None, _) => "No selection".to_string(),
	}
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(report: &SearchReport) {
	println!("{}", format_plain(report));
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(report: &SearchReport) -> Result<String> {
	let outcome = &report.outcome;
	let selection = match &outcome.selection {
		Some(selection) => json!({
			"type": selection.kind,
			"id": selection.id,
			"name": selection.name,
			"group": selection.group,
			"route": report.route,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(report: &SearchReport) -> Result<()> {
	println!("{}", format_outcome_json(report)?);
	Ok(())
}
