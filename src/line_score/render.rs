use itertools::Itertools;

use crate::line_score::entities::{inning_columns, TeamLineScore};

const UNAVAILABLE: &str = "-";
const TOTALS_SEPARATOR: &str = "|";
const TOTALS_MIN_WIDTH: usize = 2;

/// Renders lines as a fixed-width table:
///
/// ```text
/// 1 2 3 4 5 6 7 8 9 | R  H  E
/// 0 1 0 0 2 0 0 1 0 | 4  7  1  中信兄弟
/// ```
///
/// Inning columns widen for multi-digit values and extend past nine when any
/// line has extra innings. Innings a line does not have render as `-`.
pub fn render_table(lines: &[TeamLineScore]) -> String {
    let inning_count = inning_columns(lines);

    let inning_cells: Vec<Vec<String>> = lines
        .iter()
        .map(|l| {
            (0..inning_count)
                .map(|i| match l.innings().get(i) {
                    Some(Some(runs)) => runs.to_string(),
                    _ => UNAVAILABLE.to_string(),
                })
                .collect()
        })
        .collect();
    let totals: Vec<[String; 3]> = lines
        .iter()
        .map(|l| [l.runs().to_string(), l.hits().to_string(), l.errors().to_string()])
        .collect();

    let header_innings: Vec<String> = (1..=inning_count).map(|i| i.to_string()).collect();
    let inning_widths: Vec<usize> = (0..inning_count)
        .map(|i| {
            inning_cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain([header_innings[i].len()])
                .max()
                .unwrap_or(1)
        })
        .collect();
    let totals_widths: Vec<usize> = (0..3)
        .map(|i| {
            totals
                .iter()
                .map(|row| row[i].len())
                .max()
                .unwrap_or_default()
                .max(TOTALS_MIN_WIDTH)
        })
        .collect();

    let header = format_row(
        header_innings.as_slice(),
        &inning_widths,
        ["R", "H", "E"].as_slice(),
        &totals_widths,
        "",
    );
    let rows = lines
        .iter()
        .zip(inning_cells.iter().zip(totals.iter()))
        .map(|(line, (cells, rhe))| {
            format_row(
                cells.as_slice(),
                &inning_widths,
                rhe.as_slice(),
                &totals_widths,
                line.display_name(),
            )
        });

    std::iter::once(header).chain(rows).join("\n")
}

fn format_row<S: AsRef<str>, T: AsRef<str>>(
    innings: &[S],
    inning_widths: &[usize],
    totals: &[T],
    totals_widths: &[usize],
    name: &str,
) -> String {
    let innings = innings
        .iter()
        .zip(inning_widths)
        .map(|(cell, width)| format!("{:>width$}", cell.as_ref(), width = width))
        .join(" ");
    let totals = totals
        .iter()
        .zip(totals_widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .join(" ");
    format!("{innings} {TOTALS_SEPARATOR} {totals} {name}")
        .trim_end()
        .to_string()
}
