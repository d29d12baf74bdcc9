use super::Language;
use serde::{Deserialize, Serialize};

/// A page element carrying language-specific values
///
/// The update strategy is fixed by the variant: text elements rewrite their
/// visible text, image elements rewrite their source. The kind is decided once
/// at document load, never re-detected per update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranslatableElement {
    Text(TextElement),
    Image(ImageElement),
}

/// Element whose visible text tracks the current language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextElement {
    #[serde(default)]
    pub id: Option<String>,

    /// Spanish text
    #[serde(rename = "data-es")]
    pub data_es: Option<String>,

    /// English text
    #[serde(rename = "data-en")]
    pub data_en: Option<String>,

    /// Rendered text content, overwritten on every language change
    #[serde(skip)]
    pub text: String,
}

/// Element whose image source tracks the current language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageElement {
    #[serde(default)]
    pub id: Option<String>,

    /// Spanish image source
    #[serde(rename = "data-es")]
    pub data_es: Option<String>,

    /// English image source
    #[serde(rename = "data-en")]
    pub data_en: Option<String>,

    /// Rendered image source, overwritten on every language change
    #[serde(skip)]
    pub src: String,
}

impl TranslatableElement {
    pub fn text(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self::Text(TextElement {
            id: None,
            data_es: Some(es.into()),
            data_en: Some(en.into()),
            text: String::new(),
        })
    }

    pub fn image(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self::Image(ImageElement {
            id: None,
            data_es: Some(es.into()),
            data_en: Some(en.into()),
            src: String::new(),
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        match &mut self {
            Self::Text(el) => el.id = Some(id.into()),
            Self::Image(el) => el.id = Some(id.into()),
        }
        self
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(el) => el.id.as_deref(),
            Self::Image(el) => el.id.as_deref(),
        }
    }

    /// Source value for a language, or None when the attribute is absent
    pub fn translation(&self, lang: Language) -> Option<&str> {
        let (es, en) = match self {
            Self::Text(el) => (el.data_es.as_deref(), el.data_en.as_deref()),
            Self::Image(el) => (el.data_es.as_deref(), el.data_en.as_deref()),
        };
        match lang {
            Language::Es => es,
            Language::En => en,
        }
    }

    /// Rewrite the rendered slot from the given language's source value
    ///
    /// A missing value writes an empty string; the gap is not reported here.
    pub fn apply(&mut self, lang: Language) {
        let value = self.translation(lang).unwrap_or_default().to_string();
        match self {
            Self::Text(el) => el.text = value,
            Self::Image(el) => el.src = value,
        }
    }

    /// Currently rendered content (text or image source)
    pub fn visible(&self) -> &str {
        match self {
            Self::Text(el) => &el.text,
            Self::Image(el) => &el.src,
        }
    }

    /// Whether both language values are present
    pub fn is_complete(&self) -> bool {
        self.translation(Language::Es).is_some() && self.translation(Language::En).is_some()
    }

    /// Kind name for display
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }
}
