//! Terminal rendering of a [`Report`].

use std::io::{self, Write};

use colored::Colorize;
use jacket_core::{Report, TableRow, report::TABLE_HEADERS};

/// Print the recommendation, the summary line and the hourly table.
pub fn render<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let recommendation = report.recommendation.message();
    if report.recommendation.is_jacket() {
        writeln!(out, "{}", recommendation.red())?;
    } else {
        writeln!(out, "{recommendation}")?;
    }

    writeln!(out, "{}", report.summary)?;

    render_table(&report.rows, out)
}

fn render_table<W: Write>(rows: &[TableRow], out: &mut W) -> io::Result<()> {
    // Widths come from the plain text; color codes are added after padding.
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);

    writeln!(out, "{border}")?;
    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, width)| pad(h, width).bold().to_string())
        .collect();
    writeln!(out, "| {} |", header.join(" | "))?;
    writeln!(out, "{border}")?;

    for row in rows {
        let cells: Vec<String> = row
            .cells()
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let padded = pad(cell, width);
                if i == RAIN_COLUMN && row.rain_emphasized {
                    padded.red().to_string()
                } else {
                    padded
                }
            })
            .collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }

    if !rows.is_empty() {
        writeln!(out, "{border}")?;
    }

    Ok(())
}

const RAIN_COLUMN: usize = 2;

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

/// Serializes tests that touch `colored`'s process-wide override.
#[cfg(test)]
pub(crate) fn force_colors(enabled: bool) -> std::sync::MutexGuard<'static, ()> {
    static OVERRIDE: std::sync::Mutex<()> = std::sync::Mutex::new(());

    let guard = OVERRIDE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    colored::control::set_override(enabled);
    guard
}
