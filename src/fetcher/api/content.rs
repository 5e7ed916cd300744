//! Static content pages: heroes, galleries, partners, federations, footer
//! and the rich-text blocks (rules, points, international).

use reqwest::Client;
use tracing::instrument;

use crate::error::AppError;
use crate::fetcher::fetch;
use crate::fetcher::models::{
    Envelope, Federation, FooterContent, GalleryItem, Hero, Partner, TextBlock,
};
use crate::fetcher::urls::{
    build_federation_url, build_federations_url, build_footer_url, build_galleries_url,
    build_heroes_url, build_international_url, build_long_rules_url, build_partners_url,
    build_points_url, build_rules_url,
};
use crate::locale::Language;

/// Fetches the hero carousel entries.
#[instrument(skip(client))]
pub async fn fetch_heroes(client: &Client, base_url: &str) -> Result<Vec<Hero>, AppError> {
    let url = build_heroes_url(base_url);
    let envelope: Envelope<Vec<Hero>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Resolves hero images to absolute URLs, skipping entries without one.
pub fn hero_image_urls(heroes: &[Hero], base_url: &str) -> Vec<String> {
    heroes
        .iter()
        .filter_map(|h| h.image.as_ref())
        .filter_map(|m| m.absolute_url(base_url))
        .collect()
}

/// Fetches the photo gallery.
#[instrument(skip(client))]
pub async fn fetch_galleries(client: &Client, base_url: &str) -> Result<Vec<GalleryItem>, AppError> {
    let url = build_galleries_url(base_url);
    let envelope: Envelope<Vec<GalleryItem>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Fetches partners. The API already sorts by the `order` field; the sort
/// is re-applied locally so display order survives a misconfigured server.
#[instrument(skip(client))]
pub async fn fetch_partners(client: &Client, base_url: &str) -> Result<Vec<Partner>, AppError> {
    let url = build_partners_url(base_url);
    let envelope: Envelope<Vec<Partner>> = fetch(client, &url).await?;
    let mut partners = envelope.data;
    partners.sort_by_key(|p| p.order.unwrap_or(i64::MAX));
    Ok(partners)
}

/// Fetches the member federation list, ordered per the `order` field.
#[instrument(skip(client))]
pub async fn fetch_federations(client: &Client, base_url: &str) -> Result<Vec<Federation>, AppError> {
    let url = build_federations_url(base_url);
    let envelope: Envelope<Vec<Federation>> = fetch(client, &url).await?;
    let mut federations = envelope.data;
    federations.sort_by_key(|f| f.order.unwrap_or(i64::MAX));
    Ok(federations)
}

/// Fetches one federation by its document id.
#[instrument(skip(client))]
pub async fn fetch_federation(
    client: &Client,
    base_url: &str,
    document_id: &str,
) -> Result<Federation, AppError> {
    let url = build_federation_url(base_url, document_id);
    let envelope: Result<Envelope<Federation>, AppError> = fetch(client, &url).await;
    match envelope {
        Ok(envelope) => Ok(envelope.data),
        Err(e) if e.is_not_found() => Err(AppError::record_not_found("federation", document_id)),
        Err(e) => Err(e),
    }
}

/// Fetches the contact footer, served in the requested locale.
#[instrument(skip(client))]
pub async fn fetch_footer(
    client: &Client,
    base_url: &str,
    lang: Language,
) -> Result<FooterContent, AppError> {
    let url = build_footer_url(base_url, lang);
    let envelope: Envelope<FooterContent> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// The four single-record text pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBlockKind {
    /// Short rules summary, served per locale.
    Rules,
    /// Extended rules, served per locale.
    LongRules,
    /// Scoring explanation, served per locale.
    Points,
    /// International activities; carries both locales in one record.
    International,
}

impl TextBlockKind {
    fn url(self, base_url: &str, lang: Language) -> String {
        match self {
            TextBlockKind::Rules => build_rules_url(base_url, lang),
            TextBlockKind::LongRules => build_long_rules_url(base_url, lang),
            TextBlockKind::Points => build_points_url(base_url, lang),
            TextBlockKind::International => build_international_url(base_url),
        }
    }
}

/// Fetches a rich-text page. For locale-served pages the language picks the
/// request locale; the international page is filtered client-side instead.
#[instrument(skip(client))]
pub async fn fetch_text_block(
    client: &Client,
    base_url: &str,
    kind: TextBlockKind,
    lang: Language,
) -> Result<TextBlock, AppError> {
    let url = kind.url(base_url, lang);
    let envelope: Envelope<TextBlock> = fetch(client, &url).await?;
    Ok(envelope.data)
}
