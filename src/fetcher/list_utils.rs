//! Pure helpers for ordering, filtering and grouping fetched collections.
//!
//! These never touch the network; page operations compose them on top of
//! already-fetched data so the same list shaping is testable in isolation.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Sorts newest-first by the date each item's key function extracts.
/// Items whose key is `None` sink to the end. The sort is stable, so
/// items sharing a date keep their fetched order.
pub fn sort_by_date_desc<T, F>(items: &mut [T], date_key: F)
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by(|a, b| match (date_key(a), date_key(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Keeps items whose extracted text contains `query`, case-insensitively.
/// An empty query keeps everything.
pub fn filter_by_substring<T, F>(items: Vec<T>, query: &str, text_key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| text_key(item).to_lowercase().contains(&needle))
        .collect()
}

/// Splits a list into (flagged, unflagged), preserving order within each half.
pub fn partition_by_flag<T, F>(items: Vec<T>, flag: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> bool,
{
    items.into_iter().partition(|item| flag(item))
}

/// Groups items by year, newest year first. Items without a resolvable
/// year are dropped.
pub fn group_by_year<T, F>(items: Vec<T>, year_key: F) -> Vec<(i32, Vec<T>)>
where
    F: Fn(&T) -> Option<i32>,
{
    let mut groups: Vec<(i32, Vec<T>)> = Vec::new();
    for item in items {
        let Some(year) = year_key(&item) else {
            continue;
        };
        match groups.iter_mut().find(|(y, _)| *y == year) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((year, vec![item])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

/// Parses an ISO-8601 timestamp such as Strapi's `createdAt` field.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Extracts the calendar year from an ISO-8601 timestamp.
pub fn year_of_timestamp(raw: &str) -> Option<i32> {
    parse_timestamp(raw).map(|dt| dt.year())
}

/// Renders a `YYYY-MM-DD` date for display as `DD.MM.YYYY`. Input that
/// does not parse is shown as-is.
pub fn format_date_for_display(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Renders an `HH:MM:SS(.mmm)` start time as `HH:MM`. Input that does not
/// parse is shown as-is.
pub fn format_time_for_display(raw: &str) -> String {
    match raw.split(':').collect::<Vec<_>>().as_slice() {
        [h, m, ..] if h.len() == 2 && m.len() == 2 => format!("{h}:{m}"),
        _ => raw.to_string(),
    }
}
