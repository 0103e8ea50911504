use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one entry to the internal `log` table.
/// Timestamped with local time in ISO 8601.
pub fn oplog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![Local::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}
