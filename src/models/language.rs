use serde::{Deserialize, Serialize};

/// Display language for a page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish (default)
    Es,
    /// English
    En,
}

impl Default for Language {
    fn default() -> Self {
        Self::Es
    }
}

impl Language {
    /// The other language, the single transition of the two-state machine
    pub fn toggled(&self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The page document attribute holding this language's values
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Es => "data-es",
            Self::En => "data-en",
        }
    }

    /// Language name in its native form
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
