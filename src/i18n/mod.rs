//! UI strings for the supported languages.
//!
//! Messages live in `locales/<code>/main.ftl` and are loaded by the
//! `fluent_i18n::i18n!` declaration at the crate root.

use crate::model::Language;
use fluent_i18n::t;
use log::trace;
use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

/// fluent_i18n keeps one active locale for the process; switching it and
/// reading a message happen under this lock.
static ACTIVE_LOCALE: Mutex<()> = Mutex::new(());

/// Message lookup for one language.
///
/// A key missing from the selected language falls back to English, and a
/// key missing from English comes back unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn localized(&self, lookup: impl FnOnce() -> String) -> String {
        let _guard = ACTIVE_LOCALE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        fluent_i18n::set_locale(Some(self.language.code()));
        // drop the bidi isolation marks fluent puts around placeables
        lookup().replace(['\u{2068}', '\u{2069}'], "")
    }

    pub fn get(&self, key: &str) -> String {
        let text = self.localized(|| t!(key));
        if text == key {
            trace!(target: "i18n", "No message for key {:?}", key);
        }
        text
    }

    pub fn floor_requires(&self, floor: i32, skill: i64) -> String {
        self.localized(|| {
            t!("floor-requires", {
                "floor" => floor.to_string(),
                "skill" => skill.to_string(),
            })
        })
    }

    pub fn grid_dimensions(&self, rows: usize, cols: usize) -> String {
        self.localized(|| {
            t!("grid-dimensions", {
                "rows" => rows.to_string(),
                "cols" => cols.to_string(),
            })
        })
    }

    pub fn language_changed(&self, language: Language) -> String {
        self.localized(|| t!("language-changed", { "language" => language.label() }))
    }

    pub fn language_not_saved(&self, error: impl Display) -> String {
        self.localized(|| t!("language-not-saved", { "error" => error.to_string() }))
    }

    pub fn invalid_command(&self, error: impl Display) -> String {
        self.localized(|| t!("invalid-command", { "error" => error.to_string() }))
    }
}
