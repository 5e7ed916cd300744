//! Georgian Sport Backgammon Federation Portal Library
//!
//! This library provides the data-fetching and localization layer for the
//! federation's content API: typed models over `{ data, meta }` envelopes,
//! a cached and deduplicated fetch pipeline, a fetch-state machine for
//! consumers that retarget requests, and bilingual field selection.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nardi_portal::error::AppError;
//! use nardi_portal::fetcher::api::fetch_news;
//! use nardi_portal::fetcher::create_http_client_with_timeout;
//! use nardi_portal::locale::Language;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client_with_timeout(10)?;
//!     let posts = fetch_news(&client, "https://api.nardi.ge").await?;
//!
//!     for post in &posts {
//!         println!("{}", post.display_title(Language::Georgian, "-"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod locale;
pub mod localized;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, ErrorKind};
pub use fetcher::models::Envelope;
pub use fetcher::{LoadError, LoadState, Loader};
pub use locale::{Language, LanguageStore};
pub use localized::select_localized;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
