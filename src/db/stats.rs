use crate::db::migrate::SCHEMA_VERSION;
use crate::db::store::SessionStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_net};
use crate::utils::formatting::format_net;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &SessionStore, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SCHEMA VERSION
    //
    let version: i32 = store
        .conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    println!(
        "{}• Schema version:{} {} (binary supports {})",
        CYAN, RESET, version, SCHEMA_VERSION
    );

    //
    // 3) TOTAL SESSIONS
    //
    let count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = store
        .conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = store
        .conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) LIFETIME NET
    //
    if count > 0 {
        let net: i64 = store
            .conn
            .query_row("SELECT COALESCE(SUM(net), 0) FROM sessions", [], |row| {
                row.get(0)
            })?;

        println!(
            "{}• Lifetime net:{} {}{}{}",
            CYAN,
            RESET,
            color_for_net(net),
            format_net(net, true),
            RESET
        );
    }

    println!();
    Ok(())
}
