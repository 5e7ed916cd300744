//! News feed listing, search and detail lookup.

use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use tracing::instrument;

use crate::error::AppError;
use crate::fetcher::fetch;
use crate::fetcher::list_utils::{filter_by_substring, parse_timestamp, sort_by_date_desc};
use crate::fetcher::models::{Envelope, NewsPost};
use crate::fetcher::urls::{build_news_post_url, build_news_url};

/// Fetches all news posts, newest first.
#[instrument(skip(client))]
pub async fn fetch_news(client: &Client, base_url: &str) -> Result<Vec<NewsPost>, AppError> {
    let url = build_news_url(base_url);
    let envelope: Envelope<Vec<NewsPost>> = fetch(client, &url).await?;
    let mut posts = envelope.data;
    sort_by_date_desc(&mut posts, |p| {
        p.created_at.as_deref().and_then(parse_timestamp)
    });
    Ok(posts)
}

/// Keeps posts whose title (either locale) contains `query`, case-insensitively.
pub fn filter_news(posts: Vec<NewsPost>, query: &str) -> Vec<NewsPost> {
    filter_by_substring(posts, query, |p| {
        format!(
            "{} {}",
            p.title.as_deref().unwrap_or(""),
            p.english_name.as_deref().unwrap_or("")
        )
    })
}

/// Keeps posts published on the given calendar day.
pub fn filter_news_by_day(posts: Vec<NewsPost>, day: NaiveDate) -> Vec<NewsPost> {
    posts
        .into_iter()
        .filter(|p| {
            p.created_at
                .as_deref()
                .and_then(parse_timestamp)
                .is_some_and(|dt| {
                    dt.year() == day.year() && dt.month() == day.month() && dt.day() == day.day()
                })
        })
        .collect()
}

/// Fetches one news post by its document id.
#[instrument(skip(client))]
pub async fn fetch_news_post(
    client: &Client,
    base_url: &str,
    document_id: &str,
) -> Result<NewsPost, AppError> {
    let url = build_news_post_url(base_url, document_id);
    let envelope: Result<Envelope<NewsPost>, AppError> = fetch(client, &url).await;
    match envelope {
        Ok(envelope) => Ok(envelope.data),
        Err(e) if e.is_not_found() => Err(AppError::news_post_not_found(document_id)),
        Err(e) => Err(e),
    }
}
