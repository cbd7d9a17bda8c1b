use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Ru,
}

impl Language {
    pub fn all() -> Vec<Language> {
        vec![Language::En, Language::Pt, Language::Ru]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Ru => "ru",
        }
    }

    /// Only the supported codes are accepted; anything else is `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::all()
            .into_iter()
            .find(|language| language.code() == code)
    }

    pub fn label(&self) -> String {
        self.code().to_uppercase()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
