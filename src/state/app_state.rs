use crate::models::{Language, Page, ToggleEvent};
use crate::services::{LanguageToggler, PageService};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// State of one interactive session
///
/// Everything runs on a single thread driven by user input, so the page and
/// the toggler are held by plain ownership.
pub struct AppState {
    /// The loaded page, rendered in the current language
    pub page: Page,

    /// Owner of the current language selection
    pub toggler: LanguageToggler,

    /// Toggle history, newest last
    pub history: Vec<ToggleEvent>,

    /// Where the page was loaded from (None for the built-in sample)
    pub source: Option<PathBuf>,
}

impl AppState {
    /// Load a page document and initialize it in the default language
    pub fn open(path: &Path) -> Result<Self> {
        let mut page = PageService::load_page(path)?;
        let toggler = LanguageToggler::initialize(&mut page)?;

        Ok(Self {
            page,
            toggler,
            history: Vec::new(),
            source: Some(path.to_path_buf()),
        })
    }

    /// Start from the built-in sample page
    pub fn sample() -> Result<Self> {
        let mut page = Page::sample();
        let toggler = LanguageToggler::initialize(&mut page)?;

        Ok(Self {
            page,
            toggler,
            history: Vec::new(),
            source: None,
        })
    }

    /// Click the toggle control
    pub fn toggle(&mut self) -> Language {
        let from = self.toggler.current();
        let to = self.toggler.toggle(&mut self.page);
        self.history.push(ToggleEvent::new(from, to));
        to
    }

    pub fn current_language(&self) -> Language {
        self.toggler.current()
    }

    /// The toggle control's current label
    pub fn toggle_label(&self) -> Option<&str> {
        self.page.toggle.as_ref().map(|c| c.label.as_str())
    }

    /// Display name of the loaded document
    pub fn source_name(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "built-in sample".to_string(),
        }
    }
}
