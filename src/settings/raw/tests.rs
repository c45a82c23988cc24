use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"server-search",
		"--data",
		"server.json",
		"--theme",
		"slate",
		"--open",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/search.log",
	]);

	let mut config = RawConfig::default();
	config.data.path = Some(PathBuf::from("from-config.json"));
	config.ui.theme = Some("light".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.path, Some(PathBuf::from("server.json")));
	assert_eq!(config.ui.theme.as_deref(), Some("slate"));
	assert_eq!(config.ui.start_open, Some(true));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
	assert_eq!(config.log.file, Some(PathBuf::from("/tmp/search.log")));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["server-search", "-d", "server.toml"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.data_path, PathBuf::from("server.toml"));
	assert_eq!(resolved.theme_name, None);
	assert_eq!(resolved.labels.placeholder, "Search all channels and members");
	assert_eq!(resolved.labels.empty_label, "No Results found");
	assert!(!resolved.start_open);
	assert_eq!(resolved.log.level, "warn");
}

#[test]
fn configured_labels_replace_defaults() {
	let cli = CliArgs::parse_from(["server-search", "-d", "server.toml"]);
	let mut config = RawConfig::default();
	config.ui.trigger_label = Some("Find".into());
	config.ui.empty_label = Some("Nothing here".into());
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.labels.trigger_label, "Find");
	assert_eq!(resolved.labels.empty_label, "Nothing here");
	assert_eq!(resolved.labels.shortcut_hint, "Ctrl K");
}

#[test]
fn missing_data_path_is_reported() {
	let cli = CliArgs::parse_from(["server-search"]);
	let err = RawConfig::default().resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("data.path"));
}

#[test]
fn unknown_theme_lists_known_names() {
	let cli = CliArgs::parse_from(["server-search", "-d", "x.json", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("--theme"));
	assert!(message.contains("blurple"));
	assert!(message.contains("neon"));
}

#[test]
fn theme_aliases_resolve() {
	let cli = CliArgs::parse_from(["server-search", "-d", "x.json", "--theme", "Discord"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.theme, server_search::theme_by_name("blurple").expect("theme"));
}
