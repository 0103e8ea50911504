use crate::cli::parser::Commands;
use crate::core::session::SessionLogic;
use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_net};
use crate::utils::date;
use crate::utils::format_net;

/// Record a new session result.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        location,
        stake,
        hands,
        net,
    } = cmd
    {
        //
        // 1. Resolve date (default = today)
        //
        let d = match date {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        //
        // 2. Resolve location (default from config, may be empty)
        //
        let loc_final = match location {
            Some(l) => l.clone(),
            None => cfg.default_location.clone(),
        };

        //
        // 3. Resolve stake (default from config)
        //
        let stake_final = match stake {
            Some(s) => s.clone(),
            None => cfg.default_stake.clone(),
        };

        //
        // 4. Open store
        //
        let store = SessionStore::open(&cfg.database)?;

        //
        // 5. Execute logic
        //
        let session = SessionLogic::add(&store, &d.to_string(), &loc_final, &stake_final, *hands, *net)?;

        println!(
            "✅ Session recorded: {} | {} | net {}{}{}",
            session.id,
            session.date,
            color_for_net(session.net),
            format_net(session.net, true),
            RESET
        );
    }

    Ok(())
}
