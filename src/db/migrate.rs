use crate::db::log::oplog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, Result};

/// Latest schema version this binary understands.
/// Bump it together with a new step in `apply_step`.
pub const SCHEMA_VERSION: i32 = 1;

/// Ensure that the `log` table exists.
/// Kept outside the versioned steps: the audit trail must be writable
/// before the first migration runs.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// v1: sessions table plus the date index.
fn migrate_to_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id         TEXT PRIMARY KEY,
            date       TEXT NOT NULL,
            location   TEXT NOT NULL DEFAULT '',
            stake      TEXT NOT NULL DEFAULT '',
            hands      INTEGER NOT NULL DEFAULT 0,
            net        INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        "#,
    )?;
    Ok(())
}

/// One step per schema version. Future versions slot in as new arms.
fn apply_step(conn: &Connection, version: i32) -> Result<()> {
    match version {
        1 => migrate_to_v1(conn),
        _ => Ok(()),
    }
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db() ad ogni apertura dello store.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Read current schema version
    let current = schema_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {current} is newer than this binary supports ({SCHEMA_VERSION})"
        )));
    }

    // 3) Apply every missing step, oldest first
    for version in (current + 1)..=SCHEMA_VERSION {
        apply_step(conn, version).map_err(|e| {
            AppError::Migration(format!("step v{version} failed: {e}"))
        })?;

        set_schema_version(conn, version)?;

        let _ = oplog(
            conn,
            "migration_applied",
            &format!("v{version}"),
            &format!("Schema migrated to version {version}"),
        );

        success(format!("Migration applied: schema version {version}"));
    }

    Ok(())
}
