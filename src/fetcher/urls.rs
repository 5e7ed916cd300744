//! URL building utilities for the content API endpoints.
//!
//! Query strings (population hints, filters, sort directives, locale
//! selection) are assembled here and passed through opaquely; the API's own
//! query grammar is not interpreted anywhere else.

use crate::locale::Language;

/// Builds the tournament collection URL, filtered by archive state.
///
/// # Example
/// ```
/// use nardi_portal::fetcher::urls::build_tournaments_url;
///
/// let url = build_tournaments_url("https://api.example.ge", false);
/// assert_eq!(
///     url,
///     "https://api.example.ge/api/tournaments?filters[Archived][$eq]=false&populate=*"
/// );
/// ```
pub fn build_tournaments_url(base_url: &str, archived: bool) -> String {
    format!("{base_url}/api/tournaments?filters[Archived][$eq]={archived}&populate=*")
}

/// Builds a single-tournament URL by document id.
///
/// # Example
/// ```
/// use nardi_portal::fetcher::urls::build_tournament_url;
///
/// let url = build_tournament_url("https://api.example.ge", "a1b2c3");
/// assert_eq!(url, "https://api.example.ge/api/tournaments/a1b2c3?populate=*");
/// ```
pub fn build_tournament_url(base_url: &str, document_id: &str) -> String {
    format!("{base_url}/api/tournaments/{document_id}?populate=*")
}

/// Builds the tournament collection URL with only calendars populated.
/// Used for flattening every calendar and for locating one embedded event.
pub fn build_tournaments_with_calendar_url(base_url: &str) -> String {
    format!("{base_url}/api/tournaments?populate=TournamentCalendar")
}

/// Builds the tournament collection URL with only leaderboards populated.
/// `active_only` adds the non-archived filter on top.
pub fn build_tournaments_with_leaderboard_url(base_url: &str, active_only: bool) -> String {
    if active_only {
        format!(
            "{base_url}/api/tournaments?filters[Archived][$eq]=false&populate[leaderboard]=true"
        )
    } else {
        format!("{base_url}/api/tournaments?populate=leaderboard")
    }
}

/// Builds the news collection URL.
pub fn build_news_url(base_url: &str) -> String {
    format!("{base_url}/api/newsblocks?populate=*")
}

/// Builds a single news post URL by document id.
pub fn build_news_post_url(base_url: &str, document_id: &str) -> String {
    format!("{base_url}/api/newsblocks/{document_id}?populate=*")
}

/// Builds the gallery collection URL.
pub fn build_galleries_url(base_url: &str) -> String {
    format!("{base_url}/api/galleries?populate=*")
}

/// Builds the partner collection URL with the server-side order sort directive.
///
/// # Example
/// ```
/// use nardi_portal::fetcher::urls::build_partners_url;
///
/// let url = build_partners_url("https://api.example.ge");
/// assert_eq!(
///     url,
///     "https://api.example.ge/api/partners?populate=*&sort[0]=order:asc"
/// );
/// ```
pub fn build_partners_url(base_url: &str) -> String {
    format!("{base_url}/api/partners?populate=*&sort[0]=order:asc")
}

/// Builds the federation collection URL.
pub fn build_federations_url(base_url: &str) -> String {
    format!("{base_url}/api/federations?populate=*")
}

/// Builds a single federation URL by document id.
pub fn build_federation_url(base_url: &str, document_id: &str) -> String {
    format!("{base_url}/api/federations/{document_id}?populate=*")
}

/// Builds the hero banner collection URL.
pub fn build_heroes_url(base_url: &str) -> String {
    format!("{base_url}/api/heroes?populate=*")
}

/// Builds the footer single-record URL, locale-selected server-side.
pub fn build_footer_url(base_url: &str, lang: Language) -> String {
    format!("{base_url}/api/footer?locale={}", lang.tag())
}

/// Builds the short rules single-record URL.
pub fn build_rules_url(base_url: &str, lang: Language) -> String {
    format!("{base_url}/api/rule?locale={}&populate=*", lang.tag())
}

/// Builds the long rules single-record URL.
pub fn build_long_rules_url(base_url: &str, lang: Language) -> String {
    format!("{base_url}/api/long?populate=*&locale={}", lang.tag())
}

/// Builds the points system single-record URL.
pub fn build_points_url(base_url: &str, lang: Language) -> String {
    format!("{base_url}/api/point?locale={}", lang.tag())
}

/// Builds the international page URL. Locale pairs are carried in the record
/// itself, so no locale query here.
pub fn build_international_url(base_url: &str) -> String {
    format!("{base_url}/api/international?populate=*")
}

/// Builds the champions history URL.
pub fn build_contestant_results_url(base_url: &str) -> String {
    format!("{base_url}/api/Contestant-results?populate=results")
}

/// Builds the contact submission URL (POST target).
pub fn build_mails_url(base_url: &str) -> String {
    format!("{base_url}/api/mails")
}

/// Builds the external admin console URL. The redirect surface of the site:
/// the binary prints this for the operator to open.
///
/// # Example
/// ```
/// use nardi_portal::fetcher::urls::build_admin_url;
///
/// assert_eq!(
///     build_admin_url("https://api.example.ge"),
///     "https://api.example.ge/admin"
/// );
/// ```
pub fn build_admin_url(base_url: &str) -> String {
    format!("{base_url}/admin")
}
