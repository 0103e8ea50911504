use crate::cli::parser::Commands;
use crate::core::session::SessionLogic;
use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_net};
use crate::utils::date;
use crate::utils::format_net;

/// Edit an existing session in place.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        location,
        stake,
        hands,
        net,
    } = cmd
    {
        //
        // 1. Validate date, if provided
        //
        if let Some(raw) = date
            && date::parse_date(raw).is_none()
        {
            return Err(AppError::InvalidDate(raw.to_string()));
        }

        //
        // 2. Open store and apply the edit
        //
        let store = SessionStore::open(&cfg.database)?;

        let session = SessionLogic::edit(
            &store,
            id,
            date.as_deref(),
            location.as_deref(),
            stake.as_deref(),
            *hands,
            *net,
        )?;

        println!(
            "✅ Session updated: {} | {} | net {}{}{}",
            session.id,
            session.date,
            color_for_net(session.net),
            format_net(session.net, true),
            RESET
        );
    }

    Ok(())
}
