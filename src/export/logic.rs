// src/export/logic.rs

use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;

use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export delle sessioni.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: path assoluto del file di output
    /// - `range`: `None`, `"all"` oppure espressioni come:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &SessionStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let sessions = load_sessions(store, range)?;

        if sessions.is_empty() {
            warning("No sessions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&sessions, path)?,
            ExportFormat::Json => export_json(&sessions, path)?,
            ExportFormat::Xlsx => export_xlsx(&sessions, path)?,
        }

        Ok(())
    }
}

/// Carica le sessioni dal DB secondo il range, ordinate per data.
fn load_sessions(store: &SessionStore, range: &Option<String>) -> AppResult<Vec<SessionExport>> {
    let sessions = match range {
        None => all_sorted(store)?,
        Some(r) if r.eq_ignore_ascii_case("all") => all_sorted(store)?,
        Some(r) => {
            let (start, end) = parse_period(r)?;
            store.list_between(&start.to_string(), &end.to_string())?
        }
    };

    Ok(sessions.iter().map(SessionExport::from).collect())
}

fn all_sorted(store: &SessionStore) -> AppResult<Vec<crate::models::session::Session>> {
    let mut sessions = store.list_all()?;
    sessions.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    Ok(sessions)
}
