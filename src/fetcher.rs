//! Data-fetching layer for the federation content API.
//!
//! Everything the site shows follows the same pattern: build an endpoint
//! URL, GET JSON, map parallel-locale fields into display strings, sort and
//! filter in memory. This module owns that pattern: generic fetching with
//! caching and request coalescing, the per-target fetch-state machine, pure
//! list helpers, and one shaping function per page.

pub mod api;
pub mod cache;
mod fetch_utils;
pub mod http_client;
pub mod list_utils;
pub mod loader;
pub mod models;
pub mod urls;

pub use fetch_utils::{fetch, post_json};
pub use http_client::create_http_client_with_timeout;
pub use loader::{LoadError, LoadState, Loader};
