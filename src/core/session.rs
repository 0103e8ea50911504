use crate::db::log::oplog;
use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::stake::Stake;
use crate::utils::formatting::format_net;

pub struct SessionLogic;

impl SessionLogic {
    /// Record a new session.
    /// The date string is already validated by the CLI layer.
    pub fn add(
        store: &SessionStore,
        date: &str,
        location: &str,
        stake: &str,
        hands: i64,
        net: i64,
    ) -> AppResult<Session> {
        if hands < 1 {
            return Err(AppError::InvalidHands(hands));
        }
        if !stake.is_empty() {
            Stake::parse(stake)?;
        }

        let session = Session::new(date, location, stake, hands, net);
        store.upsert(&session)?;

        let _ = oplog(
            &store.conn,
            "add",
            &session.id,
            &format!(
                "Recorded session on {} ({} hands, net {})",
                date,
                hands,
                format_net(net, true)
            ),
        );

        Ok(session)
    }

    /// Apply a partial edit to an existing session and save it back as a
    /// full replace. `updated_at` is refreshed, `created_at` never moves.
    pub fn edit(
        store: &SessionStore,
        id: &str,
        date: Option<&str>,
        location: Option<&str>,
        stake: Option<&str>,
        hands: Option<i64>,
        net: Option<i64>,
    ) -> AppResult<Session> {
        let mut session = store
            .get(id)?
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;

        if let Some(d) = date {
            session.date = d.to_string();
        }
        if let Some(l) = location {
            session.location = l.to_string();
        }
        if let Some(s) = stake {
            if !s.is_empty() {
                Stake::parse(s)?;
            }
            session.stake = s.to_string();
        }
        if let Some(h) = hands {
            if h < 1 {
                return Err(AppError::InvalidHands(h));
            }
            session.hands = h;
        }
        if let Some(n) = net {
            session.net = n;
        }

        session.touch();
        store.upsert(&session)?;

        let _ = oplog(
            &store.conn,
            "edit",
            id,
            &format!("Updated session of {}", session.date),
        );

        Ok(session)
    }

    /// Delete one session by id. Returns false when the id is unknown,
    /// which is not an error.
    pub fn delete_by_id(store: &SessionStore, id: &str) -> AppResult<bool> {
        let Some(session) = store.get(id)? else {
            return Ok(false);
        };

        store.delete(id)?;

        let _ = oplog(
            &store.conn,
            "del",
            id,
            &format!("Deleted session of {}", session.date),
        );

        Ok(true)
    }

    /// Delete every session recorded on `date`.
    pub fn delete_by_date(store: &SessionStore, date: &str) -> AppResult<usize> {
        let n = store.delete_by_date(date)?;

        if n == 0 {
            return Err(AppError::NoSessionsForDate(date.to_string()));
        }

        let _ = oplog(
            &store.conn,
            "del",
            date,
            &format!("Deleted {} session(s) of {}", n, date),
        );

        Ok(n)
    }
}
