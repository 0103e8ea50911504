// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, session_to_row};
use crate::export::{SessionExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND_COLORS: [Color; 2] = [Color::RGB(0xEAF3FB), Color::RGB(0xFFFFFF)];

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(sessions: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if sessions.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(xlsx_err)?;
        workbook.save(path_str(path)?).map_err(xlsx_err)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();
    write_header_row(worksheet, &headers)?;

    // Column widths track the widest visible cell, header included
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, session) in sessions.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = BAND_COLORS[row_index % 2];

        for (col, value) in session_to_row(session).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    workbook.save(path_str(path)?).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_header_row(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();
    Ok(())
}

/// Scrive una singola cella, interpretando stringhe come data/numero se
/// possibile, così Excel riceve valori tipizzati e non solo testo.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = banded_format(bg);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(xlsx_err)?;
    } else if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(xlsx_err)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &base)
            .map_err(xlsx_err)?;
    }

    Ok(())
}

fn banded_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn xlsx_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
