//! Column-aligned tables for list pages.

use super::{accent_fg, get_ansi_code, label_fg, text_fg};

/// A simple left-aligned table. Column widths follow the widest cell,
/// capped so one long value cannot push the rest off-screen.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_column_width: usize,
}

const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;
const COLUMN_GAP: usize = 2;

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(str::to_string).collect(),
            rows: Vec::new(),
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        widths
            .into_iter()
            .map(|w| w.min(self.max_column_width))
            .collect()
    }

    fn clip(cell: &str, width: usize) -> String {
        if cell.chars().count() <= width {
            return cell.to_string();
        }
        let mut clipped: String = cell.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }

    /// Renders the table into the page buffer.
    pub fn render(&self, buffer: &mut String) {
        let widths = self.column_widths();
        let header_code = get_ansi_code(label_fg(), 45);
        let text_code = get_ansi_code(text_fg(), 252);
        let rule_code = get_ansi_code(accent_fg(), 220);

        buffer.push_str(&format!("\x1b[38;5;{header_code}m"));
        for (i, header) in self.headers.iter().enumerate() {
            buffer.push_str(&format!(
                "{:<width$}{}",
                Self::clip(header, widths[i]),
                " ".repeat(COLUMN_GAP),
                width = widths[i]
            ));
        }
        buffer.push_str("\x1b[0m\n");

        let rule_len: usize = widths.iter().sum::<usize>() + COLUMN_GAP * widths.len();
        buffer.push_str(&format!(
            "\x1b[38;5;{rule_code}m{}\x1b[0m\n",
            "─".repeat(rule_len)
        ));

        for row in &self.rows {
            buffer.push_str(&format!("\x1b[38;5;{text_code}m"));
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    buffer.push_str(&format!(
                        "{:<width$}{}",
                        Self::clip(cell, widths[i]),
                        " ".repeat(COLUMN_GAP),
                        width = widths[i]
                    ));
                }
            }
            buffer.push_str("\x1b[0m\n");
        }
    }
}
