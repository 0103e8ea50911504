use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const OP_COLUMN_MAX: usize = 60;

/// Colore ANSI per ogni operazione registrata
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "restore" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

struct LogEntry {
    id: i32,
    date: String,
    operation: String,
    /// Operation and target merged into one column, e.g. `add (uuid)`.
    op_target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &SessionStore, last: Option<usize>) -> AppResult<()> {
        let mut entries = load_entries(store)?;

        // Keep only the newest N entries when --last is given
        if let Some(n) = last
            && entries.len() > n
        {
            entries.drain(..entries.len() - n);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = column_width(&entries, |e| e.id.to_string().len(), 1);
        let date_w = column_width(&entries, |e| e.date.len(), 10);
        let op_w = column_width(&entries, |e| e.op_target.len(), 10).min(OP_COLUMN_MAX);

        println!("📜 Internal log:\n");

        for entry in entries {
            let shown = render_op_target(&entry);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                shown,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn load_entries(store: &SessionStore) -> AppResult<Vec<LogEntry>> {
    let mut stmt = store
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: String = row.get(3)?;

        // Drop the sub-second part of the stored timestamp
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        let op_target = if target.is_empty() {
            operation.clone()
        } else {
            format!("{operation} ({target})")
        };

        Ok(LogEntry {
            id: row.get(0)?,
            date,
            operation,
            op_target,
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

fn column_width(entries: &[LogEntry], f: impl Fn(&LogEntry) -> usize, min: usize) -> usize {
    entries.iter().map(f).max().unwrap_or(min)
}

/// Colora la sola operazione e tronca il tutto alla larghezza massima.
fn render_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let colored = if let Some((op, rest)) = entry.op_target.split_once(' ') {
        format!("{} {}", color.paint(op), rest)
    } else {
        color.paint(entry.op_target.as_str()).to_string()
    };

    // truncation works on the visible text, never on the ANSI codes
    let visible = strip_ansi(&colored);
    if visible.len() <= OP_COLUMN_MAX {
        return colored;
    }

    let mut s = visible.chars().take(OP_COLUMN_MAX - 3).collect::<String>();
    s.push_str("...");
    if let Some((op, rest)) = s.split_once(' ') {
        format!("{} {}", color.paint(op), rest)
    } else {
        s
    }
}
