//! Calendar assembly from per-tournament event lists.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::fetcher::fetch;
use crate::fetcher::list_utils::{filter_by_substring, partition_by_flag, sort_by_date_desc};
use crate::fetcher::models::{CalendarEvent, Envelope, Tournament};
use crate::fetcher::urls::build_tournaments_with_calendar_url;

/// Fetches every tournament's calendar and flattens it into one list,
/// newest event first. Events without a parseable date sink to the end.
#[instrument(skip(client))]
pub async fn fetch_calendar(client: &Client, base_url: &str) -> Result<Vec<CalendarEvent>, AppError> {
    let url = build_tournaments_with_calendar_url(base_url);
    let envelope: Envelope<Vec<Tournament>> = fetch(client, &url).await?;
    let mut events: Vec<CalendarEvent> = envelope
        .data
        .into_iter()
        .flat_map(|t| t.calendar)
        .collect();
    sort_by_date_desc(&mut events, event_date);
    debug!("Assembled calendar with {} events", events.len());
    Ok(events)
}

fn event_date(event: &CalendarEvent) -> Option<chrono::DateTime<chrono::Utc>> {
    event
        .date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Splits events into (finished, upcoming), keeping order within each half.
pub fn partition_events(events: Vec<CalendarEvent>) -> (Vec<CalendarEvent>, Vec<CalendarEvent>) {
    partition_by_flag(events, |e| e.finished)
}

/// Keeps events whose name (either locale) contains `query`, case-insensitively.
pub fn filter_events(events: Vec<CalendarEvent>, query: &str) -> Vec<CalendarEvent> {
    filter_by_substring(events, query, |e| {
        format!(
            "{} {}",
            e.name.as_deref().unwrap_or(""),
            e.english_name.as_deref().unwrap_or("")
        )
    })
}

/// Looks up a single event across all tournament calendars.
#[instrument(skip(client))]
pub async fn find_calendar_event(
    client: &Client,
    base_url: &str,
    event_id: i64,
) -> Result<CalendarEvent, AppError> {
    let events = fetch_calendar(client, base_url).await?;
    events
        .into_iter()
        .find(|e| e.id == event_id)
        .ok_or_else(|| AppError::calendar_event_not_found(event_id))
}
