use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::store::SessionStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, last } = cmd {
        let store = SessionStore::open(&cfg.database)?;
        LogLogic::print_log(&store, *last)?;
    }

    Ok(())
}
