use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn month_name(mm: &str) -> String {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        other => other,
    }
    .to_string()
}

/// Parse a period expression into inclusive date bounds.
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "'{p}' (start and end must have the same format)"
            )));
        }

        let (s1, _) = parse_single(start)?;
        let (_, e2) = parse_single(end)?;

        if s1 > e2 {
            return Err(AppError::InvalidPeriod(format!(
                "'{p}' (start is after end)"
            )));
        }

        Ok((s1, e2))
    } else {
        parse_single(p.trim())
    }
}

/// Bounds of a single year, month or day expression.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(format!("'{p}' (invalid year)")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (invalid year)")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (invalid year)")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y_raw, m_raw) = p
                .split_once('-')
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (expected YYYY-MM)")))?;
            let y: i32 = y_raw
                .parse()
                .map_err(|_| AppError::InvalidPeriod(format!("'{p}' (invalid year)")))?;
            let m: u32 = m_raw
                .parse()
                .map_err(|_| AppError::InvalidPeriod(format!("'{p}' (invalid month)")))?;

            let last = month_last_day(y, m)
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (invalid month)")))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (invalid month)")))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidPeriod(format!("'{p}' (invalid month)")))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidPeriod(format!(
            "'{p}' (use YYYY, YYYY-MM, YYYY-MM-DD or start:end)"
        ))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Bounds of the month `today` falls in.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let t = today();
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1).unwrap_or(t);
    let last_day = month_last_day(t.year(), t.month()).unwrap_or(t.day());
    let last = NaiveDate::from_ymd_opt(t.year(), t.month(), last_day).unwrap_or(t);
    (first, last)
}
