//! Durable session store over SQLite.
//!
//! One handle per open database. The date column carries a secondary
//! index, so date lookups never scan the whole table; results are always
//! equal to filtering `list_all` by the same predicate.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

#[derive(Debug)]
pub struct SessionStore {
    pub conn: Connection,
}

impl SessionStore {
    /// Open (or create) the database at `path` and bring the schema up to
    /// date. This is the only way to obtain a handle; nothing here is
    /// global or lazy.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::StorageUnavailable(format!("{path}: {e}")))?;

        // SQLite opens a corrupt file without complaint and only fails at
        // the first statement, so schema setup failures count as
        // unavailable storage too.
        init_db(&conn).map_err(|e| AppError::StorageUnavailable(format!("{path}: {e}")))?;

        Ok(Self { conn })
    }

    /// Every stored session, in unspecified order.
    pub fn list_all(&self) -> AppResult<Vec<Session>> {
        let mut stmt = self.conn.prepare("SELECT * FROM sessions")?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Sessions recorded on one date, via the date index.
    pub fn list_by_date(&self, date: &str) -> AppResult<Vec<Session>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM sessions
             WHERE date = ?1
             ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([date], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Sessions with `start <= date <= end`, oldest first.
    pub fn list_between(&self, start: &str, end: &str) -> AppResult<Vec<Session>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM sessions
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC, created_at ASC",
        )?;
        let rows = stmt.query_map(params![start, end], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Session>> {
        let session = self
            .conn
            .query_row("SELECT * FROM sessions WHERE id = ?1", [id], map_row)
            .optional()?;
        Ok(session)
    }

    /// Insert a session or fully replace the one sharing its id.
    /// A single statement, so readers never observe a half-written row.
    pub fn upsert(&self, session: &Session) -> AppResult<()> {
        self.conn.execute(
            UPSERT_SQL,
            params![
                session.id,
                session.date,
                session.location,
                session.stake,
                session.hands,
                session.net,
                session.created_at,
                session.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Remove the session with the given id. Silently does nothing when
    /// the id is absent.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM sessions WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Remove every session recorded on `date`, returning how many went.
    pub fn delete_by_date(&self, date: &str) -> AppResult<usize> {
        let n = self
            .conn
            .execute("DELETE FROM sessions WHERE date = ?1", [date])?;
        Ok(n)
    }

    pub fn count(&self) -> AppResult<i64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Swap the entire record set for `records` inside one transaction,
    /// returning how many rows ended up stored.
    ///
    /// Restore rides on this: a failure at any point rolls the whole
    /// thing back, so no observer (nor a crash) can see the cleared
    /// intermediate state. Duplicate ids within `records` collapse to the
    /// last occurrence, so the returned count can be lower than
    /// `records.len()`.
    pub fn replace_all(&mut self, records: &[Session]) -> AppResult<usize> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM sessions", [])?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_SQL)?;
            for s in records {
                stmt.execute(params![
                    s.id,
                    s.date,
                    s.location,
                    s.stake,
                    s.hands,
                    s.net,
                    s.created_at,
                    s.updated_at,
                ])?;
            }
        }

        let stored: i64 = tx.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        tx.commit()?;
        Ok(stored as usize)
    }
}

const UPSERT_SQL: &str = "INSERT INTO sessions
     (id, date, location, stake, hands, net, created_at, updated_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
     ON CONFLICT(id) DO UPDATE SET
         date = excluded.date,
         location = excluded.location,
         stake = excluded.stake,
         hands = excluded.hands,
         net = excluded.net,
         created_at = excluded.created_at,
         updated_at = excluded.updated_at";

pub fn map_row(row: &Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get("id")?,
        date: row.get("date")?,
        location: row.get("location")?,
        stake: row.get("stake")?,
        hands: row.get("hands")?,
        net: row.get("net")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
