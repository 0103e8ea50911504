use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::SessionStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file } = cmd {
        let mut store = SessionStore::open(&cfg.database)?;
        BackupLogic::restore(&mut store, file)?;
    }

    Ok(())
}
