//! Page-level operations over the content API.
//!
//! Each submodule owns the endpoints one page family needs and composes the
//! generic [`fetch`](crate::fetcher::fetch) pipeline with the pure list
//! helpers, so callers get fully shaped data and tagged errors.

pub mod calendar;
pub mod contact;
pub mod content;
pub mod news;
pub mod results;
pub mod tournaments;

pub use calendar::{fetch_calendar, filter_events, find_calendar_event, partition_events};
pub use contact::{admin_console_url, submit_contact};
pub use content::{
    TextBlockKind, fetch_federation, fetch_federations, fetch_footer, fetch_galleries,
    fetch_heroes, fetch_partners, fetch_text_block, hero_image_urls,
};
pub use news::{fetch_news, fetch_news_post, filter_news, filter_news_by_day};
pub use results::{ChampionsMatrix, fetch_champions};
pub use tournaments::{
    LeaderboardView, fetch_active_tournaments, fetch_archived_tournaments_by_year,
    fetch_leaderboard, fetch_tournament,
};
