//! Table component renderer.
//!
//! Renders column headers and page rows as fixed-width text columns. Each
//! column is as wide as its widest cell or label, capped at
//! [`MAX_COLUMN_WIDTH`].

use crate::app::modes::SortDirection;
use crate::ui::helpers::{char_width, fit, rule, truncate};
use crate::ui::viewmodel::{ColumnHeader, RowItem};

/// Widest a single column may grow before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 32;

const COLUMN_GAP: &str = "  ";

fn header_label(column: &ColumnHeader) -> String {
    match column.sorted {
        Some(SortDirection::Ascending) => format!("{} ^", column.label),
        Some(SortDirection::Descending) => format!("{} v", column.label),
        None => column.label.clone(),
    }
}

fn column_widths(labels: &[String], rows: &[RowItem]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            rows.iter()
                .filter_map(|row| row.cells.get(index))
                .map(|cell| char_width(&cell.text))
                .chain(std::iter::once(char_width(label)))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], cols: usize) -> String {
    let line = cells
        .zip(widths)
        .map(|(text, width)| fit(text, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    truncate(line.trim_end(), cols)
}

/// Renders the header row, a separator and one line per row.
#[must_use]
pub fn render_table(columns: &[ColumnHeader], rows: &[RowItem], cols: usize) -> Vec<String> {
    let labels: Vec<String> = columns.iter().map(header_label).collect();
    let widths = column_widths(&labels, rows);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(labels.iter().map(String::as_str), &widths, cols));
    lines.push(rule(cols));
    for row in rows {
        lines.push(join_cells(row.cells.iter().map(|cell| cell.text.as_str()), &widths, cols));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::CellItem;

    fn row(cells: &[&str]) -> RowItem {
        RowItem {
            cells: cells
                .iter()
                .map(|text| CellItem {
                    text: (*text).to_string(),
                    link: None,
                })
                .collect(),
        }
    }

    fn column(label: &str, sorted: Option<SortDirection>) -> ColumnHeader {
        ColumnHeader {
            label: label.to_string(),
            sortable: true,
            sorted,
        }
    }

    #[test]
    fn aligns_columns_to_widest_cell() {
        let lines = render_table(
            &[column("Name", None), column("Industry", Some(SortDirection::Descending))],
            &[row(&["Acme", "Retail"]), row(&["Initech Systems", "Energy"])],
            80,
        );

        assert_eq!(lines[0], "Name             Industry v");
        assert_eq!(lines[2], "Acme             Retail");
        assert_eq!(lines[3], "Initech Systems  Energy");
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(40);
        let lines = render_table(&[column("Name", None)], &[row(&[&long])], 80);
        assert_eq!(char_width(&lines[2]), MAX_COLUMN_WIDTH);
        assert!(lines[2].ends_with("..."));
    }
}
