use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::utils::colors::{RESET, color_for_net, colorize_optional};
use crate::utils::date;
use crate::utils::format_net;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table, fit_width};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        location,
        summary,
    } = cmd
    {
        let store = SessionStore::open(&cfg.database)?;

        //
        // 1. Load sessions for the requested period
        //
        let mut sessions = match period.as_deref() {
            None => {
                let (start, end) = date::current_month_bounds();
                print_header(&start, &end);
                store.list_between(&start.to_string(), &end.to_string())?
            }
            Some("all") => {
                println!("📅 All saved sessions:");
                let mut all = store.list_all()?;
                all.sort_by(|a, b| {
                    a.date
                        .cmp(&b.date)
                        .then_with(|| a.created_at.cmp(&b.created_at))
                });
                all
            }
            Some(p) => {
                let (start, end) = date::parse_period(p)?;
                print_header(&start, &end);
                store.list_between(&start.to_string(), &end.to_string())?
            }
        };

        //
        // 2. Optional location filter (case-insensitive substring)
        //
        if let Some(needle) = location {
            let needle = needle.to_lowercase();
            sessions.retain(|s| s.location.to_lowercase().contains(&needle));
        }

        println!();

        if sessions.is_empty() {
            println!("⚠️  No recorded sessions found");
            return Ok(());
        }

        //
        // 3. Render table
        //
        print_sessions(&sessions);

        //
        // 4. Optional summary block
        //
        if *summary {
            print_summary(&sessions, &cfg.currency);
        }
    }
    Ok(())
}

fn print_header(start: &chrono::NaiveDate, end: &chrono::NaiveDate) {
    if start == end {
        println!("📅 Saved sessions for {}:", start);
    } else if start.day() == 1
        && start.month() == 1
        && end.month() == 12
        && end.day() == 31
        && start.year() == end.year()
    {
        println!("📅 Saved sessions for year {}:", start.year());
    } else if start.day() == 1 && start.month() == end.month() && start.year() == end.year() {
        println!(
            "📅 Saved sessions for {} {}:",
            date::month_name(&format!("{:02}", start.month())),
            start.year()
        );
    } else {
        println!("📅 Saved sessions from {} to {}:", start, end);
    }
}

fn print_sessions(sessions: &[Session]) {
    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: fit_width("ID", sessions.iter().map(|s| s.id.clone())),
        },
        Column {
            header: "DATE".to_string(),
            width: fit_width("DATE", sessions.iter().map(|s| s.date.clone())),
        },
        Column {
            header: "LOCATION".to_string(),
            width: fit_width("LOCATION", sessions.iter().map(|s| s.location.clone())),
        },
        Column {
            header: "STAKE".to_string(),
            width: fit_width("STAKE", sessions.iter().map(|s| s.stake.clone())),
        },
        Column {
            header: "HANDS".to_string(),
            width: fit_width("HANDS", sessions.iter().map(|s| s.hands.to_string())),
        },
        Column {
            header: "NET".to_string(),
            width: fit_width("NET", sessions.iter().map(|s| format_net(s.net, true))),
        },
    ]);

    for s in sessions {
        table.add_row(vec![
            s.id.clone(),
            s.date.clone(),
            colorize_optional(&s.location),
            colorize_optional(&s.stake),
            s.hands.to_string(),
            format!("{}{}{}", color_for_net(s.net), format_net(s.net, true), RESET),
        ]);
    }

    print!("{}", table.render());
}

fn print_summary(sessions: &[Session], currency: &str) {
    let totals = SummaryLogic::build(sessions);

    println!();
    println!("{}", bold("Summary"));
    println!("  Sessions: {}", totals.sessions);
    println!("  Hands:    {}", totals.hands);
    println!(
        "  Net:      {}{} {}{}",
        color_for_net(totals.net),
        format_net(totals.net, true),
        currency,
        RESET
    );

    if let Some((day, net)) = &totals.best_day {
        println!(
            "  Best day: {} ({}{}{})",
            day,
            color_for_net(*net),
            format_net(*net, true),
            RESET
        );
    }
    if let Some((day, net)) = &totals.worst_day {
        println!(
            "  Worst day: {} ({}{}{})",
            day,
            color_for_net(*net),
            format_net(*net, true),
            RESET
        );
    }
}
