//! Current-language state with a persisted preference.
//!
//! The federation site is bilingual: every localized record carries parallel
//! Georgian and English fields. This module owns which of the two languages
//! is active, persists the choice across sessions, and fans out changes to
//! every subscriber so a language toggle takes effect immediately without
//! re-fetching any data.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::paths::get_language_pref_path;
use crate::constants::lang::{ENGLISH_TAG, GEORGIAN_TAG};
use crate::error::AppError;

/// The two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Georgian,
}

impl Language {
    /// The wire/storage tag for this language. These are the exact tags the
    /// content API's `locale` query parameter accepts.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => ENGLISH_TAG,
            Language::Georgian => GEORGIAN_TAG,
        }
    }

    /// Parses a stored or user-supplied tag. Anything that is not exactly the
    /// English tag resolves to Georgian - the federation's home locale. This
    /// is the single place the fallback decision is made.
    pub fn from_tag(tag: &str) -> Language {
        match tag.trim() {
            t if t.eq_ignore_ascii_case(ENGLISH_TAG) => Language::English,
            GEORGIAN_TAG => Language::Georgian,
            other => {
                if !other.is_empty() && other != GEORGIAN_TAG {
                    debug!("Unrecognized language tag '{other}', defaulting to Georgian");
                }
                Language::Georgian
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Process-wide language state: single writer (the user toggling), many
/// readers. Readers subscribe to a watch channel and observe every change
/// within the same event-loop turn.
#[derive(Debug)]
pub struct LanguageStore {
    tx: watch::Sender<Language>,
    pref_path: PathBuf,
}

impl LanguageStore {
    /// Opens the store backed by the given preference file. A missing or
    /// unreadable file yields the Georgian default.
    pub fn open(pref_path: impl Into<PathBuf>) -> Self {
        let pref_path = pref_path.into();
        let initial = match fs::read_to_string(&pref_path) {
            Ok(tag) => Language::from_tag(&tag),
            Err(_) => Language::Georgian,
        };
        debug!("Language preference loaded: {initial}");
        let (tx, _) = watch::channel(initial);
        Self { tx, pref_path }
    }

    /// Opens the store at the default platform preference location.
    pub fn open_default() -> Self {
        Self::open(get_language_pref_path())
    }

    /// The currently active language.
    pub fn current(&self) -> Language {
        *self.tx.borrow()
    }

    /// Switches the active language. Persists the preference synchronously
    /// and notifies every subscriber. Persistence failure keeps the in-memory
    /// switch (the session still works, only the next startup forgets).
    pub fn set(&self, lang: Language) -> Result<(), AppError> {
        self.tx.send_replace(lang);
        if let Some(parent) = Path::new(&self.pref_path).parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        if let Err(e) = fs::write(&self.pref_path, lang.tag()) {
            warn!(
                "Failed to persist language preference to {}: {e}",
                self.pref_path.display()
            );
            return Err(e.into());
        }
        debug!("Language switched to {lang}");
        Ok(())
    }

    /// Subscribes to language changes. The receiver immediately holds the
    /// current value and sees every subsequent `set`.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }
}
