use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a freshly opened connection up to the current schema.
///
/// Schema creation and upgrades live entirely in the migration engine;
/// nothing issues CREATE TABLE from here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)
}
