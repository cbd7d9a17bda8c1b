use crate::model::Language;
use log::{info, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the UI language is stored under.
pub const LANGUAGE_KEY: &str = "wurm-carpentry-lang";

const DATA_DIR_ENV: &str = "CARPENTRY_DATA_DIR";
const APP_DIR: &str = "wurm-carpentry";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("could not write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no data directory; set CARPENTRY_DATA_DIR or HOME")]
    NoDataDir,
}

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences held in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk. The file is re-read on
/// every lookup, so several stores on the same path stay consistent.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user data directory: `$CARPENTRY_DATA_DIR`, else
    /// `$XDG_DATA_HOME`, else `$HOME/.local/share`.
    pub fn in_user_data_dir() -> Result<Self, PreferenceError> {
        let data_dir = Self::user_data_dir().ok_or(PreferenceError::NoDataDir)?;
        Ok(Self::new(data_dir.join(APP_DIR).join(PREFERENCES_FILE)))
    }

    fn user_data_dir() -> Option<PathBuf> {
        let from_env = |name: &str| {
            std::env::var_os(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        from_env(DATA_DIR_ENV)
            .or_else(|| from_env("XDG_DATA_HOME"))
            .or_else(|| from_env("HOME").map(|home| home.join(".local").join("share")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&contents) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    target: "preferences",
                    "Ignoring unreadable preferences at {}: {}",
                    self.path.display(),
                    err
                );
                BTreeMap::new()
            }
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// The UI language, loaded from and written through to a preference store.
pub struct LanguagePreference {
    language: Language,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl LanguagePreference {
    /// Uses the stored language if it is one we support, English otherwise.
    pub fn init(store: Box<dyn PreferenceStore>) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                warn!(target: "preferences", "Unsupported language {:?}, using default", code);
                Language::default()
            }),
            None => Language::default(),
        };
        info!(target: "preferences", "UI language: {}", language);
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The in-memory value changes even when persisting fails.
    pub fn set_language(&mut self, language: Language) -> Result<(), PreferenceError> {
        self.language = language;
        self.store.set(LANGUAGE_KEY, language.code())
    }
}
