use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["server-search"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.open);
	assert_eq!(parsed.data, None);
}

#[test]
fn config_flag_is_repeatable() {
	let parsed = CliArgs::parse_from([
		"server-search",
		"-c",
		"a.toml",
		"--config",
		"b.toml",
		"-d",
		"server.json",
		"-o",
		"json",
	]);
	assert_eq!(
		parsed.config,
		[PathBuf::from("a.toml"), PathBuf::from("b.toml")]
	);
	assert_eq!(parsed.data, Some(PathBuf::from("server.json")));
	assert_eq!(parsed.output, OutputFormat::Json);
}
