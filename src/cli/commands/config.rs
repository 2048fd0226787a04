use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand.
///
/// waterlog keeps two files next to each other in the config dir: the app
/// config (database + preference paths) and the preference store itself.
/// `--print` shows where everything lives; `--edit` opens the app config.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Config file : {}", path.display());
            println!("🗄️  Database   : {}", cfg.database);
            println!("🎯 Preferences : {}", cfg.settings);
            println!();
            println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&chosen, &path) {
                println!("✅ Configuration updated with '{}'", chosen);
            } else {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    chosen, fallback
                );
                if run_editor(&fallback, &path) {
                    println!("✅ Configuration updated with '{}'", fallback);
                } else {
                    eprintln!(
                        "❌ Failed to edit '{}' with '{}'",
                        path.display(),
                        fallback
                    );
                }
            }
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
