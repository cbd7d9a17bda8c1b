use super::preferences::{LanguagePreference, PreferenceError, PreferenceStore};
use crate::i18n::Messages;
use crate::model::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("app context built without a preference store")]
    MissingStore,
}

/// What the presentation layer needs to localise itself. Built once at
/// startup and passed down by reference.
#[derive(Debug)]
pub struct AppContext {
    language: LanguagePreference,
}

#[derive(Default)]
pub struct AppContextBuilder {
    store: Option<Box<dyn PreferenceStore>>,
}

impl AppContextBuilder {
    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn build(self) -> Result<AppContext, ConfigError> {
        let store = self.store.ok_or(ConfigError::MissingStore)?;
        Ok(AppContext {
            language: LanguagePreference::init(store),
        })
    }
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language.language()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), PreferenceError> {
        self.language.set_language(language)
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.language())
    }
}
