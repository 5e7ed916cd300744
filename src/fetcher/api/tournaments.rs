//! Tournament listings, detail lookup and leaderboard selection.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::constants::leaderboard;
use crate::error::AppError;
use crate::fetcher::fetch;
use crate::fetcher::list_utils::{group_by_year, parse_timestamp, sort_by_date_desc};
use crate::fetcher::models::{Envelope, LeaderboardEntry, Tournament};
use crate::fetcher::urls::{
    build_tournament_url, build_tournaments_url, build_tournaments_with_leaderboard_url,
};

/// Fetches non-archived tournaments, newest first.
#[instrument(skip(client))]
pub async fn fetch_active_tournaments(
    client: &Client,
    base_url: &str,
) -> Result<Vec<Tournament>, AppError> {
    let url = build_tournaments_url(base_url, false);
    let envelope: Envelope<Vec<Tournament>> = fetch(client, &url).await?;
    let mut tournaments = envelope.data;
    sort_by_date_desc(&mut tournaments, |t| {
        t.created_at.as_deref().and_then(parse_timestamp)
    });
    debug!("Fetched {} active tournaments", tournaments.len());
    Ok(tournaments)
}

/// Fetches archived tournaments grouped by year, newest year first.
///
/// A tournament's explicit `year` field wins; without one the creation
/// year is used. Tournaments with neither are dropped from the archive.
#[instrument(skip(client))]
pub async fn fetch_archived_tournaments_by_year(
    client: &Client,
    base_url: &str,
) -> Result<Vec<(i32, Vec<Tournament>)>, AppError> {
    let url = build_tournaments_url(base_url, true);
    let envelope: Envelope<Vec<Tournament>> = fetch(client, &url).await?;
    let mut tournaments = envelope.data;
    sort_by_date_desc(&mut tournaments, |t| {
        t.created_at.as_deref().and_then(parse_timestamp)
    });
    Ok(group_by_year(tournaments, tournament_year))
}

fn tournament_year(t: &Tournament) -> Option<i32> {
    t.year.or_else(|| {
        t.created_at
            .as_deref()
            .and_then(crate::fetcher::list_utils::year_of_timestamp)
    })
}

/// Fetches one tournament by its document id.
#[instrument(skip(client))]
pub async fn fetch_tournament(
    client: &Client,
    base_url: &str,
    document_id: &str,
) -> Result<Tournament, AppError> {
    let url = build_tournament_url(base_url, document_id);
    let envelope: Result<Envelope<Tournament>, AppError> = fetch(client, &url).await;
    match envelope {
        Ok(envelope) => Ok(envelope.data),
        Err(e) if e.is_not_found() => Err(AppError::tournament_not_found(document_id)),
        Err(e) => Err(e),
    }
}

/// A tournament paired with its ranked top standings.
#[derive(Debug, Clone)]
pub struct LeaderboardView {
    pub tournament: Tournament,
    /// Entries ordered best-first, capped at the display limit.
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardView {
    /// 1-based rank of an entry by position.
    pub fn rank_of(&self, index: usize) -> usize {
        index + 1
    }
}

/// Fetches the leaderboard to feature on the front page.
///
/// With a document id, that tournament's standings are looked up across all
/// tournaments, archived included. Without one, only non-archived
/// tournaments are considered and the most recently updated one that
/// actually has standings wins. Returns `None` when no candidate has a
/// populated leaderboard.
#[instrument(skip(client))]
pub async fn fetch_leaderboard(
    client: &Client,
    base_url: &str,
    document_id: Option<&str>,
) -> Result<Option<LeaderboardView>, AppError> {
    let url = build_tournaments_with_leaderboard_url(base_url, document_id.is_none());
    let envelope: Envelope<Vec<Tournament>> = fetch(client, &url).await?;
    let mut candidates: Vec<Tournament> = envelope
        .data
        .into_iter()
        .filter(|t| t.leaderboard.len() >= leaderboard::MIN_POPULATED_ENTRIES)
        .collect();

    let tournament = match document_id {
        Some(id) => candidates.into_iter().find(|t| t.document_id == id),
        None => {
            sort_by_date_desc(&mut candidates, |t| {
                t.updated_at.as_deref().and_then(parse_timestamp)
            });
            candidates.into_iter().next()
        }
    };

    Ok(tournament.map(ranked_view))
}

fn ranked_view(mut tournament: Tournament) -> LeaderboardView {
    let mut entries = std::mem::take(&mut tournament.leaderboard);
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(leaderboard::TOP_ENTRIES);
    LeaderboardView { tournament, entries }
}
