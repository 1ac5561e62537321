//! Output formatters for the data view report.
//!
//! Provides the two supported output formats: a grid-bordered table and
//! pretty-printed JSON. The table always includes the header row, even when
//! there are no data rows.

use anyhow::Result;

use crate::report::DataViewRow;

/// Report column headers, in output order.
const HEADERS: [&str; 4] = ["ID", "Title", "Time Field", "Field Count"];

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the report rows.
    fn format_report(&self, rows: &[DataViewRow]) -> Result<String>;
}

/// Get the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, rows: &[DataViewRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }
}

/// Grid table formatter.
///
/// Renders a bordered grid with a `=` rule under the header row and a `-`
/// rule after every data row.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, rows: &[DataViewRow]) -> Result<String> {
        let cells: Vec<[String; 4]> = rows
            .iter()
            .map(|row| {
                [
                    row.id.clone(),
                    row.title.clone(),
                    row.time_field.clone(),
                    row.field_count.to_string(),
                ]
            })
            .collect();

        let mut widths: [usize; 4] = [0; 4];
        for (width, header) in widths.iter_mut().zip(HEADERS) {
            *width = header.len();
        }
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut lines = Vec::with_capacity(cells.len() * 2 + 3);
        lines.push(border(&widths, '-'));
        lines.push(grid_row(&widths, &HEADERS.map(String::from)));
        lines.push(border(&widths, '='));
        for row in &cells {
            lines.push(grid_row(&widths, row));
            lines.push(border(&widths, '-'));
        }

        Ok(lines.join("\n"))
    }
}

fn border(widths: &[usize; 4], fill: char) -> String {
    let mut line = String::new();
    for width in widths {
        line.push('+');
        line.extend(std::iter::repeat_n(fill, width + 2));
    }
    line.push('+');
    line
}

fn grid_row(widths: &[usize; 4], cells: &[String; 4]) -> String {
    let mut line = String::new();
    for (&width, cell) in widths.iter().zip(cells) {
        line.push_str(&format!("| {cell:<width$} "));
    }
    line.push('|');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> DataViewRow {
        DataViewRow {
            id: "1".to_string(),
            title: "Test Title".to_string(),
            time_field: "timestamp".to_string(),
            field_count: 2,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_table_with_one_row() {
        let output = TableFormatter.format_report(&[sample_row()]).unwrap();
        let expected = "\
+----+------------+------------+-------------+
| ID | Title      | Time Field | Field Count |
+====+============+============+=============+
| 1  | Test Title | timestamp  | 2           |
+----+------------+------------+-------------+";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_table_with_defaults_row() {
        let row = DataViewRow {
            id: "1".to_string(),
            title: "Test Title".to_string(),
            time_field: "N/A".to_string(),
            field_count: 0,
        };
        let output = TableFormatter.format_report(&[row]).unwrap();
        assert!(output.contains("| 1  | Test Title | N/A        | 0           |"));
    }

    #[test]
    fn test_empty_table_renders_headers_only() {
        let output = TableFormatter.format_report(&[]).unwrap();
        let expected = "\
+----+-------+------------+-------------+
| ID | Title | Time Field | Field Count |
+====+=======+============+=============+";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_table_widens_columns_to_fit() {
        let row = DataViewRow {
            id: "very-long-identifier".to_string(),
            title: "T".to_string(),
            time_field: "@timestamp".to_string(),
            field_count: 1234,
        };
        let output = TableFormatter.format_report(&[row]).unwrap();
        assert!(output.contains("| very-long-identifier |"));
        // Every line of a grid has the same length.
        let lengths: Vec<_> = output.lines().map(str::len).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format_report(&[sample_row()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], "1");
        assert_eq!(parsed[0]["title"], "Test Title");
        assert_eq!(parsed[0]["time_field"], "timestamp");
        assert_eq!(parsed[0]["field_count"], 2);
    }

    #[test]
    fn test_json_empty_report_is_empty_array() {
        let output = JsonFormatter.format_report(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
