//! Terminal rendering for page output.
//!
//! Pages are composed into a single string buffer with ANSI escape codes and
//! written to stdout in one operation to avoid flicker on slow terminals.

pub mod interactive;
pub mod rich_text;
pub mod search;
pub mod table;

use std::io::Write;

use crossterm::style::Color;
use crossterm::{execute, style::Print};

pub use interactive::run_search_loop;
pub use rich_text::render_rich_text;
pub use search::SearchDebouncer;
pub use table::Table;

// Page palette
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn header_bg() -> Color {
    Color::AnsiValue(24)
} // Deep blue
pub fn label_fg() -> Color {
    Color::AnsiValue(45)
} // Bright cyan
pub fn text_fg() -> Color {
    Color::AnsiValue(252)
} // Light grey
pub fn accent_fg() -> Color {
    Color::AnsiValue(220)
} // Gold
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Extracts the 256-color index, falling back for non-indexed colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(code) => code,
        _ => fallback,
    }
}

/// Renders the page title banner into the buffer.
pub fn push_page_header(buffer: &mut String, title: &str, width: usize) {
    let fg = get_ansi_code(header_fg(), 231);
    let bg = get_ansi_code(header_bg(), 24);
    buffer.push_str(&format!(
        "\x1b[48;5;{bg}m\x1b[38;5;{fg}m {title:<width$}\x1b[0m\n",
        width = width.saturating_sub(1)
    ));
}

/// Renders a `label: value` line into the buffer.
pub fn push_field(buffer: &mut String, label: &str, value: &str) {
    let label_code = get_ansi_code(label_fg(), 45);
    let text_code = get_ansi_code(text_fg(), 252);
    buffer.push_str(&format!(
        "\x1b[38;5;{label_code}m{label}:\x1b[0m \x1b[38;5;{text_code}m{value}\x1b[0m\n"
    ));
}

/// Renders a failure line into the buffer.
pub fn push_error_line(buffer: &mut String, message: &str) {
    let code = get_ansi_code(error_fg(), 196);
    buffer.push_str(&format!("\x1b[38;5;{code}m{message}\x1b[0m\n"));
}

/// Writes a composed page buffer to stdout in one operation.
pub fn print_page(buffer: &str) -> Result<(), std::io::Error> {
    let mut stdout = std::io::stdout();
    execute!(stdout, Print(buffer))?;
    stdout.flush()?;
    Ok(())
}
