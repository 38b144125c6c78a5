//! Pipe-delimited Markdown tables with aligned columns.
//!
//! Column widths are measured with `unicode-width` so cells holding `µs`,
//! `∞` or `⚡` still line up in a terminal.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column's data cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

/// A table whose rows are rendered with padded, aligned cells.
///
/// Header cells are always left-justified. Rows whose cells are all empty
/// count toward column widths but are not emitted.
#[derive(Debug, Clone)]
pub struct AlignedTable {
    headers: Vec<String>,
    justify: Vec<Justify>,
    rows: Vec<Vec<String>>,
}

impl AlignedTable {
    /// Create a table with every column left-justified.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let justify = vec![Justify::Left; headers.len()];
        Self {
            headers,
            justify,
            rows: Vec::new(),
        }
    }

    /// Set the alignment of one column; out-of-range columns are ignored.
    #[must_use]
    pub fn justify(mut self, column: usize, justify: Justify) -> Self {
        if let Some(slot) = self.justify.get_mut(column) {
            *slot = justify;
        }
        self
    }

    /// Append a row. Short rows are padded with empty cells.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Append an all-empty row, used as a group separator.
    pub fn push_blank(&mut self) {
        self.rows.push(vec![String::new(); self.headers.len()]);
    }

    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    /// Render header, separator and data rows joined by `\n` (no trailing newline).
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header_cells: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad(cell, width, Justify::Left))
            .collect();
        lines.push(format!("| {} |", header_cells.join(" | ")));

        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        lines.push(format!("|{}|", dashes.join("|")));

        for row in &self.rows {
            if row.iter().all(String::is_empty) {
                continue;
            }
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(&self.justify)
                .map(|((cell, &width), &justify)| pad(cell, width, justify))
                .collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }

        lines.join("\n")
    }
}

/// Pad `text` with spaces to `width` display columns.
#[must_use]
pub fn pad(text: &str, width: usize, justify: Justify) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match justify {
        Justify::Left => format!("{text}{fill}"),
        Justify::Right => format!("{fill}{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_by_display_width() {
        assert_eq!(pad("1.00 µs", 9, Justify::Right), "  1.00 µs");
        assert_eq!(pad("ab", 4, Justify::Left), "ab  ");
        assert_eq!(pad("toolong", 3, Justify::Left), "toolong");
    }

    #[test]
    fn test_render_alignment() {
        let mut table = AlignedTable::new(["Name", "Value"]).justify(1, Justify::Right);
        table.push_row(vec!["a".to_string(), "1".to_string()]);
        table.push_row(vec!["longer".to_string(), "22".to_string()]);

        let expected = "\
| Name   | Value |
|--------|-------|
| a      |     1 |
| longer |    22 |";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let mut table = AlignedTable::new(["A", "B"]);
        table.push_row(vec!["x".to_string(), "y".to_string()]);
        table.push_blank();
        table.push_row(vec!["z".to_string()]);

        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.ends_with("| z |   |"));
    }

    #[test]
    fn test_all_lines_same_width() {
        let mut table = AlignedTable::new(["Operation", "Time", ""]);
        table.push_row(vec!["cached".to_string(), "∞".to_string(), "⚡".to_string()]);
        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }
}
