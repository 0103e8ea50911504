use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

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
    if let Commands::Del { id, date: date_str } = cmd {
        //
        // Delete by id
        //
        if let Some(session_id) = id {
            let prompt = format!(
                "Delete session '{}'? This action is irreversible.",
                session_id
            );

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let store = SessionStore::open(&cfg.database)?;

            if SessionLogic::delete_by_id(&store, session_id)? {
                success(format!("Session '{}' has been deleted.", session_id));
            } else {
                warning(format!("No session found with id '{}'.", session_id));
            }

            return Ok(());
        }

        //
        // Delete by date
        //
        if let Some(raw) = date_str {
            let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.into()))?;

            let prompt = format!("Delete ALL sessions for {}? This action is irreversible.", d);

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let store = SessionStore::open(&cfg.database)?;
            let n = SessionLogic::delete_by_date(&store, &d.to_string())?;

            success(format!("{} session(s) for {} have been deleted.", n, d));
            return Ok(());
        }

        return Err(AppError::Other(
            "del requires --id or --date. See 'rtally del --help'.".to_string(),
        ));
    }

    Ok(())
}
