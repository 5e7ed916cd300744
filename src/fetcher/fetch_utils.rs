//! Generic HTTP fetching utilities with caching, request coalescing, retry
//! logic, and error handling.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{cache_ttl, retry};
use crate::error::AppError;
use crate::fetcher::cache::{begin_request, cache_http_response, get_cached_http_response};

/// Generic fetch with HTTP caching, in-flight coalescing, retry logic, and
/// comprehensive error handling.
///
/// This function:
/// - Checks the HTTP response cache first; a valid cached body never hits the network
/// - Coalesces concurrent requests for the same URL into one
/// - Retries transient failures (timeouts, connect errors, 429, 5xx) with
///   exponential backoff, respecting Retry-After headers
/// - Maps failures onto the error taxonomy so callers can branch on kind
/// - Caches successful responses with a TTL based on the endpoint type
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    // Check the response cache first
    if let Some(cached_response) = get_cached_http_response(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
                // Continue with a fresh request if the cached body is invalid
            }
        }
    }

    // One request per URL at a time. Re-check the cache once the permit is
    // held: a coalesced caller finds the body the first caller just cached.
    let _guard = begin_request(url).await;
    if let Some(cached_response) = get_cached_http_response(url).await
        && let Ok(parsed) = serde_json::from_str::<T>(&cached_response)
    {
        debug!("Coalesced request served from cache: {url}");
        return Ok(parsed);
    }

    let response = send_with_retries(client, url).await?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(status_error(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            // Cache only valid/parsable payloads; move the body (no clone)
            cache_http_response(url.to_string(), response_text, ttl_for_url(url)).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Posts a JSON body and returns unit on any 2xx status.
///
/// Used for the contact submission. Mutations are never cached, never
/// coalesced, and never retried - a duplicate send is worse than a failure
/// the user can see and repeat.
#[instrument(skip(client, body))]
pub async fn post_json<B: Serialize>(client: &Client, url: &str, body: &B) -> Result<(), AppError> {
    info!("Posting data to URL: {url}");

    let response = match client.post(url).json(body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(transport_error(e, url));
        }
    };

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    info!("Submission accepted with status {status}");
    Ok(())
}

/// Sends a GET with retries and exponential backoff for transient failures.
/// `retry::MAX_ATTEMPTS` bounds the total number of requests sent.
async fn send_with_retries(client: &Client, url: &str) -> Result<reqwest::Response, AppError> {
    let mut attempt = 1u32;
    let max_attempts = retry::MAX_ATTEMPTS;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_attempts {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status, url, wait, attempt, max_attempts
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                return Ok(resp);
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < max_attempts {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e, url, backoff, attempt, max_attempts
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return Err(transport_error(e, url));
            }
        }
    }
}

fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// TTL for a successful response, by endpoint type: static text pages change
/// rarely, detail records change more often than collection listings.
fn ttl_for_url(url: &str) -> u64 {
    if url.contains("/api/rule")
        || url.contains("/api/long")
        || url.contains("/api/point")
        || url.contains("/api/international")
    {
        cache_ttl::TEXT_BLOCK_SECONDS
    } else if url.contains("/api/tournaments/") || url.contains("/api/newsblocks/") {
        cache_ttl::DETAIL_SECONDS
    } else {
        cache_ttl::COLLECTION_SECONDS
    }
}
