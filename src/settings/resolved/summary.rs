use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Data: {}", config.data_path.display());
	println!(
		"  UI theme: {}",
		config.theme_name.as_deref().unwrap_or("(default)")
	);
	println!("  Start open: {}", bool_to_word(config.start_open));
	println!("  Trigger label: {}", config.labels.trigger_label);
	println!("  Shortcut hint: {}", config.labels.shortcut_hint);
	println!("  Placeholder: {}", config.labels.placeholder);
	println!("  Empty label: {}", config.labels.empty_label);
	if !config.labels.dialog_title.is_empty() {
		println!("  Dialog title: {}", config.labels.dialog_title);
	}
	println!("  Log level: {}", config.log.level);
	match &config.log.file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (cache directory)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use server_search::logging::LogSettings;
	use server_search::{PaletteLabels, default_theme};

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			data_path: PathBuf::from("server.json"),
			theme_name: Some("slate".into()),
			theme: default_theme(),
			labels: PaletteLabels {
				dialog_title: "Find".into(),
				..PaletteLabels::default()
			},
			start_open: true,
			log: LogSettings::default(),
		};

		print_summary(&config);
	}
}
