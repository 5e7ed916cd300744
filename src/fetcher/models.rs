use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::Language;
use crate::localized::pick;

/// Every content endpoint wraps its payload the same way: `{ data, meta? }`.
/// Detail endpoints may answer with `data: null` for absent records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// An uploaded media file attached to a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
}

impl Media {
    /// Absolute URL of the file. Uploaded media come back with paths relative
    /// to the API host.
    pub fn absolute_url(&self, base_url: &str) -> Option<String> {
        self.url.as_deref().map(|u| {
            if u.starts_with("http://") || u.starts_with("https://") {
                u.to_string()
            } else {
                format!("{}{u}", base_url.trim_end_matches('/'))
            }
        })
    }
}

/// One scheduled event inside a tournament's embedded calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    /// Event date, YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
    /// Start time of day, HH:MM:SS
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub finished: bool,
    /// External page with the full results
    #[serde(default)]
    pub url: Option<String>,
    /// Result table as an HTML fragment, present once the event has results
    #[serde(default)]
    pub results: Option<String>,
}

impl CalendarEvent {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

/// One leaderboard row embedded in a tournament.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub score: f64,
}

impl LeaderboardEntry {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "Archived", default)]
    pub archived: bool,
    /// Explicit season year; archives without one fall back to the creation year
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "TournamentCalendar", default)]
    pub calendar: Vec<CalendarEvent>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Tournament {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

/// A news post. Georgian posts pair `title` with the `englishName` variant
/// and `body` with `englishBody`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: i64,
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    /// Rich-text blocks
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(rename = "englishBody", default)]
    pub english_body: Option<Value>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    /// Cover image
    #[serde(default)]
    pub content: Option<Media>,
}

impl NewsPost {
    pub fn display_title(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.title.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }

    pub fn localized_body(&self, lang: Language) -> Option<&Value> {
        let (preferred, fallback) = match lang {
            Language::English => (&self.english_body, &self.body),
            Language::Georgian => (&self.body, &self.english_body),
        };
        preferred.as_ref().or(fallback.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    #[serde(default)]
    pub file: Option<Media>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    /// Server-side display order
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub content: Option<Media>,
}

impl Partner {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

/// A member federation. Pairs `title` with `englishName`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Federation {
    pub id: i64,
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub content: Option<Media>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "englishDescription", default)]
    pub english_description: Option<String>,
}

impl Federation {
    pub fn display_title(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.title.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    #[serde(default)]
    pub image: Option<Media>,
}

/// The single footer record: contact details. Locale-selected server-side.
/// The `adress` spelling is the API's own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub adress: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
}

/// One champion entry for a given year inside a contestant's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearResult {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
}

impl YearResult {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

/// A championship category column with its per-year results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContestantResult {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub results: Vec<YearResult>,
}

impl ContestantResult {
    pub fn display_name(&self, lang: Language, placeholder: &str) -> String {
        pick(
            self.name.as_deref(),
            self.english_name.as_deref(),
            lang,
            placeholder,
        )
        .to_string()
    }
}

/// A static single-record text page (rules, long rules, points, international).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBlock {
    /// Rich-text blocks (paragraphs, lists)
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub image: Option<Media>,
    /// International page carries locale pairs instead of server-side locale
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(rename = "englishContent", default)]
    pub english_content: Option<Value>,
}

impl TextBlock {
    /// The rich-text payload to render: `text` for locale-served pages,
    /// the locale-matching `content` pair otherwise.
    pub fn rich_text(&self, lang: Language) -> Option<&Value> {
        if self.text.is_some() {
            return self.text.as_ref();
        }
        let (preferred, fallback) = match lang {
            Language::English => (&self.english_content, &self.content),
            Language::Georgian => (&self.content, &self.english_content),
        };
        preferred.as_ref().or(fallback.as_ref())
    }
}

/// A contact form submission, posted as `{ "data": { name, email, message } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
