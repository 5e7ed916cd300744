//! Champions history as a contestants-by-years matrix.

use reqwest::Client;
use tracing::instrument;

use crate::error::AppError;
use crate::fetcher::fetch;
use crate::fetcher::models::{ContestantResult, Envelope, YearResult};
use crate::fetcher::urls::build_contestant_results_url;

/// All contestants with per-year results, plus the distinct years they
/// cover, newest first. A missing (contestant, year) cell is simply absent.
#[derive(Debug, Clone, Default)]
pub struct ChampionsMatrix {
    pub years: Vec<i32>,
    pub contestants: Vec<ContestantResult>,
}

impl ChampionsMatrix {
    fn from_contestants(contestants: Vec<ContestantResult>) -> Self {
        let mut years: Vec<i32> = contestants
            .iter()
            .flat_map(|c| c.results.iter().map(|r| r.year))
            .collect();
        years.sort_unstable();
        years.dedup();
        years.reverse();
        Self { years, contestants }
    }

    /// The result a contestant posted in a given year, if any.
    pub fn result_for<'a>(
        &self,
        contestant: &'a ContestantResult,
        year: i32,
    ) -> Option<&'a YearResult> {
        contestant.results.iter().find(|r| r.year == year)
    }
}

/// Fetches every contestant's yearly results and shapes them into a matrix.
#[instrument(skip(client))]
pub async fn fetch_champions(client: &Client, base_url: &str) -> Result<ChampionsMatrix, AppError> {
    let url = build_contestant_results_url(base_url);
    let envelope: Envelope<Vec<ContestantResult>> = fetch(client, &url).await?;
    Ok(ChampionsMatrix::from_contestants(envelope.data))
}
