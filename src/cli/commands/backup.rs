use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::SessionStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = SessionStore::open(&cfg.database)?;
        BackupLogic::backup(&store, file, *force, *compress)?;
    }

    Ok(())
}
