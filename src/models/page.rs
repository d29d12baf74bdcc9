use super::{Language, TranslatableElement};
use serde::{Deserialize, Serialize};

/// A bilingual page document
///
/// Mirrors the authored document: element order is preserved, and rendered
/// content (element text/src, toggle label) is the only part that changes at
/// runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,

    /// Translatable elements in document order
    #[serde(default, rename = "element")]
    pub elements: Vec<TranslatableElement>,

    /// The clickable toggle control; required for initialization
    #[serde(default)]
    pub toggle: Option<ToggleControl>,
}

/// The single control that flips the page language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleControl {
    #[serde(default = "default_toggle_id")]
    pub id: String,

    /// Visible label; set reactively on each click, otherwise as authored
    #[serde(default)]
    pub label: String,
}

fn default_toggle_id() -> String {
    "langToggle".to_string()
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self {
            id: default_toggle_id(),
            label: String::new(),
        }
    }
}

impl ToggleControl {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            id: default_toggle_id(),
            label: label.into(),
        }
    }
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            elements: Vec::new(),
            toggle: None,
        }
    }

    pub fn with_element(mut self, element: TranslatableElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_toggle(mut self, toggle: ToggleControl) -> Self {
        self.toggle = Some(toggle);
        self
    }

    /// Find an element by its id
    pub fn element_by_id(&self, id: &str) -> Option<&TranslatableElement> {
        self.elements.iter().find(|el| el.id() == Some(id))
    }

    /// Elements missing one of the two language values
    pub fn incomplete_elements(&self) -> Vec<&TranslatableElement> {
        self.elements.iter().filter(|el| !el.is_complete()).collect()
    }

    /// Languages missing from each element, flattened for reporting
    pub fn missing_translations(&self) -> Vec<(usize, &'static str)> {
        let mut missing = Vec::new();
        for (index, el) in self.elements.iter().enumerate() {
            for lang in [Language::Es, Language::En] {
                if el.translation(lang).is_none() {
                    missing.push((index, lang.attribute()));
                }
            }
        }
        missing
    }

    /// Built-in sample page used by the interactive mode and `sample` command
    pub fn sample() -> Self {
        Page::new("Congreso de Vialidad 2026")
            .with_element(
                TranslatableElement::text("Bienvenidos al congreso", "Welcome to the congress")
                    .with_id("headline"),
            )
            .with_element(
                TranslatableElement::text(
                    "Inscripciones abiertas hasta marzo",
                    "Registration open until March",
                )
                .with_id("registration"),
            )
            .with_element(
                TranslatableElement::image("banners/portada_es.png", "banners/cover_en.png")
                    .with_id("banner"),
            )
            .with_toggle(ToggleControl::with_label("English"))
    }
}
