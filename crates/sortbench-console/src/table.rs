//! Grid tables for terminal output.

use num_format::{Locale, ToFormattedString};
use sortbench_benchmark::BenchmarkReport;

use crate::format::format_elapsed;

/// A plain-text table drawn with `+`, `-`, `=` and `|`.
///
/// Cells that parse as numbers are right-aligned, everything else is
/// left-aligned.
///
/// ```
/// use sortbench_console::ConsoleTable;
///
/// let mut table = ConsoleTable::new(["Size", "Type"]);
/// table.add_row(["10", "random"]);
///
/// let rendered = table.render();
/// assert!(rendered.contains("| Size | Type   |"));
/// assert!(rendered.contains("|   10 | random |"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ConsoleTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with empty cells; extra cells are
    /// dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders the table, one line per border and row.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let border = |fill: char| -> String {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat(fill).take(width + 2));
                line.push('+');
            }
            line
        };

        let mut lines = vec![border('-'), render_row(&self.headers, &widths, false)];
        lines.push(border('='));
        for row in &self.rows {
            lines.push(render_row(row, &widths, true));
            lines.push(border('-'));
        }
        if self.rows.is_empty() {
            lines.pop();
            lines.push(border('-'));
        }
        lines.join("\n")
    }
}

fn render_row(cells: &[String], widths: &[usize], align_numbers: bool) -> String {
    let mut line = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        if align_numbers && is_numeric(cell) {
            line.push(' ');
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
            line.push_str(" |");
        } else {
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
            line.push_str(" |");
        }
    }
    line
}

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.replace(',', "").parse::<f64>().is_ok()
}

/// Table of every successful trial in `report`, ordered by distribution
/// then size.
pub fn report_table(report: &BenchmarkReport) -> ConsoleTable {
    let instrumented = report.algorithm.is_instrumented();
    let mut headers = vec!["Distribution", "Size", "Time", "Memory (bytes)"];
    if instrumented {
        headers.extend(["Comparisons", "Swaps"]);
    }
    let mut table = ConsoleTable::new(headers);

    for bucket in report {
        for record in &bucket.records {
            let mut row = vec![
                bucket.distribution.to_string(),
                record.size.to_formatted_string(&Locale::en),
                format_elapsed(record.elapsed),
                record.memory_bytes.to_formatted_string(&Locale::en),
            ];
            if let Some(counts) = record.counts() {
                row.push(counts.comparisons.to_formatted_string(&Locale::en));
                row.push(counts.swaps.to_formatted_string(&Locale::en));
            }
            table.add_row(row);
        }
    }
    table
}

/// One row per (algorithm, distribution) with average and total time.
pub fn comparison_table(reports: &[&BenchmarkReport]) -> ConsoleTable {
    let mut table = ConsoleTable::new(["Algorithm", "Distribution", "Trials", "Avg Time", "Total Time"]);
    for report in reports {
        for bucket in report.iter() {
            let total = bucket.records.iter().map(|r| r.elapsed).sum();
            table.add_row([
                report.algorithm.to_string(),
                bucket.distribution.to_string(),
                bucket.records.len().to_string(),
                format_elapsed(bucket.average_elapsed()),
                format_elapsed(total),
            ]);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_benchmark::BenchmarkRecord;
    use sortbench_core::{DistributionKind, OperationCounts, SortAlgorithm};
    use std::time::Duration;

    #[test]
    fn test_render_grid() {
        let mut table = ConsoleTable::new(["A", "Name"]);
        table.add_row(["1", "x"]);
        table.add_row(["200"]);
        let expected = "\
+-----+------+
| A   | Name |
+=====+======+
|   1 | x    |
+-----+------+
| 200 |      |
+-----+------+";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_empty_table() {
        let table = ConsoleTable::new(["Only"]);
        assert_eq!(table.render(), "+------+\n| Only |\n+------+");
    }

    #[test]
    fn test_multibyte_width() {
        let mut table = ConsoleTable::new(["Time"]);
        table.add_row(["12.0 μs"]);
        let rendered = table.render();
        assert!(rendered.contains("| 12.0 μs |"));
        assert!(rendered.starts_with("+---------+"));
    }

    #[test]
    fn test_report_table_columns() {
        let mut report = BenchmarkReport::new("Bubble", SortAlgorithm::BubbleSort);
        report.add_record(BenchmarkRecord::new(
            DistributionKind::Descending,
            1000,
            Duration::from_millis(4),
            8024,
            Some(OperationCounts { comparisons: 499_500, swaps: 499_500 }),
        ));
        let table = report_table(&report);
        assert_eq!(table.row_count(), 1);
        let rendered = table.render();
        assert!(rendered.contains("Comparisons"));
        assert!(rendered.contains("499,500"));
        assert!(rendered.contains("4.0 ms"));
        assert!(rendered.contains("descending"));
    }

    #[test]
    fn test_comparison_table_rows() {
        let mut quick = BenchmarkReport::new("Q", SortAlgorithm::QuickSort);
        quick.add_record(BenchmarkRecord::new(
            DistributionKind::Random,
            10,
            Duration::from_micros(2),
            104,
            None,
        ));
        let table = comparison_table(&[&quick]);
        assert_eq!(table.row_count(), 1);
        assert!(table.render().contains("QuickSort"));
    }
}
