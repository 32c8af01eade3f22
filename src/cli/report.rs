//! Coverage table formatting and printing.
//!
//! Separate from core logic to allow doccov to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::core::{AggregateRecord, CoverageRecord, CoverageReport};

const HEADERS: [&str; COLUMNS] = [
    "File Path",
    "Total Declarations",
    "Documented Declarations",
    "Undocumented Lines",
    "Percentage",
];

const COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Text columns are left-aligned, counts and percentages right-aligned.
const ALIGNMENTS: [Align; COLUMNS] = [
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Left,
    Align::Right,
];

type Row = [String; COLUMNS];

/// Print the result of a command to stdout.
pub fn print(result: &CommandResult) {
    print_table_to(&result.report, &mut io::stdout().lock());
}

/// Print the coverage table to a custom writer.
///
/// One row per file in report order, a separator, then the `Total` row.
/// The header and `Total` rows are bold when colors are enabled.
pub fn print_table_to<W: Write>(report: &CoverageReport, writer: &mut W) {
    let header: Row = HEADERS.map(String::from);
    let body: Vec<Row> = report.files.iter().map(file_row).collect();
    let total = total_row(&report.total);

    let widths = column_widths(
        std::iter::once(&header)
            .chain(&body)
            .chain(std::iter::once(&total)),
    );

    let _ = writeln!(writer, "{}", border(&widths, '┌', '┬', '┐'));
    let _ = writeln!(writer, "{}", format_row(&header, &widths, RowStyle::Header));
    let _ = writeln!(writer, "{}", border(&widths, '├', '┼', '┤'));
    for row in &body {
        let _ = writeln!(writer, "{}", format_row(row, &widths, RowStyle::Body));
    }
    let _ = writeln!(writer, "{}", border(&widths, '├', '┼', '┤'));
    let _ = writeln!(writer, "{}", format_row(&total, &widths, RowStyle::Total));
    let _ = writeln!(writer, "{}", border(&widths, '└', '┴', '┘'));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowStyle {
    Header,
    Body,
    Total,
}

fn file_row(record: &CoverageRecord) -> Row {
    [
        record.file_path.clone(),
        record.total.to_string(),
        record.documented.to_string(),
        record.undocumented_lines(),
        record.percentage().to_string(),
    ]
}

fn total_row(total: &AggregateRecord) -> Row {
    [
        "Total".to_string(),
        total.total.to_string(),
        total.documented.to_string(),
        String::new(),
        total.percentage().to_string(),
    ]
}

/// Display width of the widest cell in each column.
fn column_widths<'a>(rows: impl Iterator<Item = &'a Row>) -> [usize; COLUMNS] {
    let mut widths = [0; COLUMNS];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn border(widths: &[usize; COLUMNS], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn format_row(row: &Row, widths: &[usize; COLUMNS], style: RowStyle) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .zip(ALIGNMENTS)
        .map(|((cell, &width), align)| {
            // Headers stay left-aligned so their labels line up.
            let align = if style == RowStyle::Header {
                Align::Left
            } else {
                align
            };
            let padded = pad(cell, width, align);
            match style {
                RowStyle::Body => padded,
                RowStyle::Header | RowStyle::Total => padded.bold().to_string(),
            }
        })
        .collect();
    format!("│ {} │", cells.join(" │ "))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}
