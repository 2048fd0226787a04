use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::repo::WaterRepo;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !yes {
            let prompt = format!("Delete entry #{}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let repo = WaterRepo::open(cfg)?;
        if repo.remove_entry_by_id(*id)? {
            success(format!("Entry #{} has been deleted.", id));
        } else {
            info(format!("No entry #{} found, nothing deleted.", id));
        }
    }

    Ok(())
}
