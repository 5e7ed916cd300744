//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds. Keeps slow content-API
/// requests from hanging a command indefinitely.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Maximum number of cached HTTP responses
pub const HTTP_CACHE_CAPACITY: usize = 100;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for collection listings (tournaments, news, partners...)
    pub const COLLECTION_SECONDS: u64 = 300;

    /// TTL for single-record detail responses
    pub const DETAIL_SECONDS: u64 = 120;

    /// TTL for rarely changing static text blocks (rules, points...)
    pub const TEXT_BLOCK_SECONDS: u64 = 1800;
}

/// Search input handling
pub mod search {
    /// Debounce delay for interactive search keystrokes (milliseconds)
    pub const DEBOUNCE_MS: u64 = 500;
}

/// Language / localization constants
pub mod lang {
    /// Tag for the English locale
    pub const ENGLISH_TAG: &str = "en";

    /// Tag for the Georgian locale (the federation's home locale)
    pub const GEORGIAN_TAG: &str = "ka-GE";

    /// Placeholder shown when neither locale variant of a field is present
    pub const MISSING_TEXT_PLACEHOLDER: &str = "-";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for content API base URL override
    pub const API_URL: &str = "NARDI_API_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NARDI_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NARDI_HTTP_TIMEOUT";
}

/// Retry configuration for transient API failures
pub mod retry {
    /// Total number of request attempts for transient failures
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}

/// Leaderboard presentation
pub mod leaderboard {
    /// Number of entries shown on the leaderboard page
    pub const TOP_ENTRIES: usize = 10;

    /// A leaderboard is considered populated with at least this many entries
    pub const MIN_POPULATED_ENTRIES: usize = 1;
}
