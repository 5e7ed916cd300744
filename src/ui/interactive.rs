//! Interactive search over an already fetched list.
//!
//! Runs a raw-mode event loop: keystrokes edit the query line, the debouncer
//! commits it once typing has been quiet for the debounce window, and the
//! table re-renders from the in-memory list. No network traffic after the
//! initial fetch.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use tracing::debug;

use crate::error::AppError;
use crate::ui::{self, SearchDebouncer, Table};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the search loop until the user leaves with Esc, Enter or Ctrl+C.
///
/// `rows_for` maps a committed query to the table rows to show; the caller
/// closes over the fetched records and its own filter.
pub fn run_search_loop<F>(title: &str, headers: &[&str], rows_for: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Vec<Vec<String>>,
{
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let result = search_loop(title, headers, rows_for);

    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn search_loop<F>(title: &str, headers: &[&str], rows_for: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Vec<Vec<String>>,
{
    let mut debouncer = SearchDebouncer::new();
    let mut typed = String::new();
    let mut committed = String::new();
    let mut needs_render = true;

    loop {
        if let Some(query) = debouncer.poll(Instant::now()) {
            debug!("Search query committed: {query:?}");
            committed = query;
            needs_render = true;
        }

        if needs_render {
            needs_render = false;
            let buffer = page_buffer(title, &typed, headers, rows_for(&committed));
            execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
            // Raw mode does not translate line feeds
            ui::print_page(&buffer.replace('\n', "\r\n"))?;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Esc | KeyCode::Enter => break,
                    KeyCode::Char('c')
                        if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        break;
                    }
                    KeyCode::Backspace => {
                        typed.pop();
                        debouncer.update(&typed, Instant::now());
                        needs_render = true;
                    }
                    KeyCode::Char(c) => {
                        typed.push(c);
                        debouncer.update(&typed, Instant::now());
                        needs_render = true;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Composes one frame: title banner, live query line, filtered table.
/// The query line shows what is being typed; the rows follow the last
/// committed query, so the table lags the keystrokes by the debounce window.
fn page_buffer(title: &str, typed: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut buffer = String::new();
    ui::push_page_header(&mut buffer, title, 60);
    ui::push_field(&mut buffer, "Search", typed);
    buffer.push('\n');

    if rows.is_empty() {
        ui::push_error_line(&mut buffer, "No matches");
    } else {
        let mut table = Table::new(headers.to_vec());
        for row in rows {
            table.add_row(row);
        }
        table.render(&mut buffer);
    }
    buffer.push('\n');
    buffer.push_str("Type to search, Esc to leave\n");
    buffer
}
