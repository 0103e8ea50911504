use crate::models::session::Session;
use std::collections::BTreeMap;

/// Aggregate totals over a set of sessions.
pub struct PeriodSummary {
    pub sessions: usize,
    pub hands: i64,
    pub net: i64,
    pub best_day: Option<(String, i64)>,
    pub worst_day: Option<(String, i64)>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// Fold sessions into period totals. Best and worst day compare the
    /// summed net per date, earliest date wins ties.
    pub fn build(sessions: &[Session]) -> PeriodSummary {
        let mut hands: i64 = 0;
        let mut net: i64 = 0;
        let mut per_day: BTreeMap<String, i64> = BTreeMap::new();

        for s in sessions {
            hands += s.hands;
            net += s.net;
            *per_day.entry(s.date.clone()).or_insert(0) += s.net;
        }

        let mut best_day: Option<(String, i64)> = None;
        let mut worst_day: Option<(String, i64)> = None;

        for (date, day_net) in &per_day {
            match &best_day {
                Some((_, n)) if day_net <= n => {}
                _ => best_day = Some((date.clone(), *day_net)),
            }
            match &worst_day {
                Some((_, n)) if day_net >= n => {}
                _ => worst_day = Some((date.clone(), *day_net)),
            }
        }

        PeriodSummary {
            sessions: sessions.len(),
            hands,
            net,
            best_day,
            worst_day,
        }
    }
}
