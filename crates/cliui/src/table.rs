//! Tables of token cells
//!
//! Each cell is a token sequence, rendered with and without color. The
//! layout is the classic "simple" format: columns two spaces apart, a dash
//! rule under the headers, numbers right-aligned and text left-aligned.
//! Widths are measured on visible characters only, so colored cells line
//! up with plain ones.

use console::measure_text_width;

use crate::render::{Rendered, render_with_prefix};
use crate::token::Token;
use crate::ui::{Stream, Ui};

/// One table cell
pub type Cell = Vec<Token>;

const COLUMN_GAP: &str = "  ";
const HEADER_PADDING: usize = 2;

#[derive(Debug, Clone, Default)]
/// Rows of token cells, with optional headers
pub struct Table {
    headers: Option<Vec<Cell>>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// A table from rows of cells
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            headers: None,
            rows,
        }
    }

    /// Add a header row
    pub fn with_headers(mut self, headers: Vec<Cell>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// A table from `(header, column)` pairs
    ///
    /// Shorter columns are padded with empty cells.
    pub fn from_columns(columns: Vec<(Cell, Vec<Cell>)>) -> Self {
        let height = columns.iter().map(|(_, col)| col.len()).max().unwrap_or(0);
        let mut headers = Vec::with_capacity(columns.len());
        let mut rows: Vec<Vec<Cell>> = vec![Vec::with_capacity(columns.len()); height];

        for (header, column) in columns {
            headers.push(header);
            let mut cells = column.into_iter();
            for row in &mut rows {
                row.push(cells.next().unwrap_or_default());
            }
        }

        Self::new(rows).with_headers(headers)
    }

    /// Whether there is nothing to print
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.headers.is_none()
    }

    /// Lay out the table, with escape codes if `color`
    pub fn render(&self, color: bool) -> String {
        let headers: Option<Vec<Rendered>> = self
            .headers
            .as_ref()
            .map(|h| h.iter().map(|cell| render_cell(cell)).collect());
        let rows: Vec<Vec<Rendered>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| render_cell(cell)).collect())
            .collect();

        let ncols = rows
            .iter()
            .map(Vec::len)
            .chain(headers.as_ref().map(Vec::len))
            .max()
            .unwrap_or(0);
        if ncols == 0 {
            return String::new();
        }

        let numeric: Vec<bool> = (0..ncols).map(|c| is_numeric_column(&rows, c)).collect();

        let mut widths = vec![0; ncols];
        for row in &rows {
            for (c, cell) in row.iter().enumerate() {
                widths[c] = widths[c].max(measure_text_width(&cell.without_color));
            }
        }
        if let Some(headers) = &headers {
            for (c, cell) in headers.iter().enumerate() {
                widths[c] = widths[c].max(measure_text_width(&cell.without_color) + HEADER_PADDING);
            }
        }

        let line = |cells: &[Rendered]| -> String {
            (0..ncols)
                .map(|c| {
                    let text = cells.get(c).map_or("", |cell| cell.select(color));
                    align(text, widths[c], numeric[c])
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        };
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        match &headers {
            Some(headers) => {
                lines.push(line(headers.as_slice()));
                lines.push(rule);
                lines.extend(rows.iter().map(|row| line(row.as_slice())));
            }
            None => {
                lines.push(rule.clone());
                lines.extend(rows.iter().map(|row| line(row.as_slice())));
                lines.push(rule);
            }
        }
        lines.join("\n")
    }
}

fn render_cell(cell: &[Token]) -> Rendered {
    render_with_prefix(cell, " ", "", None)
}

/// A column is numeric when every non-empty cell parses as a number
fn is_numeric_column(rows: &[Vec<Rendered>], c: usize) -> bool {
    let mut values = rows
        .iter()
        .filter_map(|row| row.get(c))
        .map(|cell| cell.without_color.trim())
        .filter(|s| !s.is_empty())
        .peekable();
    values.peek().is_some() && values.all(|s| s.parse::<f64>().is_ok())
}

fn align(text: &str, width: usize, right: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(measure_text_width(text)));
    if right {
        format!("{pad}{text}")
    } else {
        format!("{text}{pad}")
    }
}

impl Ui {
    /// Print a table on stdout
    pub fn info_table(&mut self, table: &Table) {
        self.info_table_to(table, Stream::Stdout);
    }

    /// Print a table, colored if `stream` gets colors
    pub fn info_table_to(&mut self, table: &Table, stream: Stream) {
        let color = self.color_enabled(stream);
        let plain = format!("{}\n", table.render(false));
        self.recorder_mut().record(&plain);
        if color {
            let colored = format!("{}\n", table.render(true));
            self.write(stream, &colored);
        } else {
            self.write(stream, &plain);
        }
    }
}
