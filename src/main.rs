mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, SearchReport, parse_cli, print_json, print_plain};
use server_search::logging;
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for theme in server_search::theme_descriptors() {
			if theme.aliases.is_empty() {
				println!("{}", theme.name);
			} else {
				println!("{} (aliases: {})", theme.name, theme.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved.log)?;

	let report = run_search(resolved)?;
	emit(cli.output, &report)
}

/// Execute the search workflow.
fn run_search(settings: ResolvedConfig) -> Result<SearchReport> {
	let workflow = SearchWorkflow::from_config(settings)?;
	workflow.run()
}

/// Print the report in the chosen format.
fn emit(format: OutputFormat, report: &SearchReport) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(report),
		OutputFormat::Json => print_json(report)?,
	}

	Ok(())
}
