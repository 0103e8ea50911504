use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::store::SessionStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea ~/.rtally/ e ~/.rtally/rtally.conf;
    // in test mode il config file viene lasciato intatto.
    //
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load()?;

    // In test mode il config file non viene riscritto: l'override --db vince.
    let db_path = match &cli.db {
        Some(custom) => Config::resolve_db_path(custom).to_string_lossy().to_string(),
        None => cfg.database.clone(),
    };

    println!("⚙️  Initializing rTally…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ APERTURA STORE (tabelle + migrazioni incluse)
    //
    let store = SessionStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = log::oplog(
        &store.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rTally initialization completed!");
    Ok(())
}
