use crate::models::{Language, Page};
use crate::utils::error::{Result, TogglerError};

/// Keeps every translatable element synchronized with a single shared
/// language selection, and drives the one control that flips it.
///
/// The current language lives here and nowhere else; `toggle` is the only
/// mutation.
#[derive(Debug, Clone)]
pub struct LanguageToggler {
    current: Language,
}

impl LanguageToggler {
    /// Bind to the page's toggle control and apply the default language
    ///
    /// The control is a precondition: a page without one cannot be toggled,
    /// so initialization fails rather than deferring the fault to the first
    /// click. The control's label is left as authored; it is only rewritten
    /// reactively, on click.
    pub fn initialize(page: &mut Page) -> Result<Self> {
        if page.toggle.is_none() {
            return Err(TogglerError::ToggleControlMissing);
        }

        let toggler = Self {
            current: Language::default(),
        };
        toggler.apply_language(toggler.current, page);

        tracing::info!("Page initialized in {}", toggler.current.native_name());
        Ok(toggler)
    }

    /// The current display language
    pub fn current(&self) -> Language {
        self.current
    }

    /// Rewrite every element's rendered content from the given language
    ///
    /// Does not change the current selection.
    pub fn apply_language(&self, lang: Language, page: &mut Page) {
        for element in &mut page.elements {
            element.apply(lang);
        }
        tracing::debug!("Applied {} to {} elements", lang, page.elements.len());
    }

    /// Handle a click on the toggle control
    ///
    /// Flips the language, relabels the control with the native name of the
    /// language the *next* click would switch to, then reapplies. The label
    /// names the action, not the state.
    pub fn toggle(&mut self, page: &mut Page) -> Language {
        let previous = self.current;
        self.current = self.current.toggled();

        if let Some(control) = page.toggle.as_mut() {
            control.label = self.current.toggled().native_name().to_string();
        }

        self.apply_language(self.current, page);

        tracing::info!(
            "Language toggled: {} -> {}",
            previous.native_name(),
            self.current.native_name()
        );
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ToggleControl, TranslatableElement};

    fn test_page() -> Page {
        Page::new("Test")
            .with_element(TranslatableElement::text("Hola", "Hello").with_id("greeting"))
            .with_element(TranslatableElement::image("es.png", "en.png").with_id("banner"))
            .with_toggle(ToggleControl::with_label("English"))
    }

    #[test]
    fn test_initialize_applies_spanish() {
        let mut page = test_page();
        let toggler = LanguageToggler::initialize(&mut page).unwrap();

        assert_eq!(toggler.current(), Language::Es);
        assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hola");
        assert_eq!(page.element_by_id("banner").unwrap().visible(), "es.png");
    }

    #[test]
    fn test_initialize_keeps_authored_label() {
        let mut page = test_page();
        LanguageToggler::initialize(&mut page).unwrap();

        // The label is only ever set reactively on click
        assert_eq!(page.toggle.as_ref().unwrap().label, "English");
    }

    #[test]
    fn test_initialize_without_control_fails() {
        let mut page = Page::new("Test").with_element(TranslatableElement::text("Hola", "Hello"));

        let result = LanguageToggler::initialize(&mut page);
        assert!(matches!(result, Err(TogglerError::ToggleControlMissing)));
    }

    #[test]
    fn test_toggle_flips_content_and_label() {
        let mut page = test_page();
        let mut toggler = LanguageToggler::initialize(&mut page).unwrap();

        let lang = toggler.toggle(&mut page);
        assert_eq!(lang, Language::En);
        assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hello");
        // Label names the language the next click switches to
        assert_eq!(page.toggle.as_ref().unwrap().label, "Español");
    }

    #[test]
    fn test_two_toggles_round_trip() {
        let mut page = test_page();
        let mut toggler = LanguageToggler::initialize(&mut page).unwrap();

        toggler.toggle(&mut page);
        toggler.toggle(&mut page);

        assert_eq!(toggler.current(), Language::Es);
        assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hola");
        assert_eq!(page.element_by_id("banner").unwrap().visible(), "es.png");
        assert_eq!(page.toggle.as_ref().unwrap().label, "English");
    }

    #[test]
    fn test_apply_language_is_pure_wrt_state() {
        let mut page = test_page();
        let toggler = LanguageToggler::initialize(&mut page).unwrap();

        toggler.apply_language(Language::En, &mut page);

        assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hello");
        // The selection did not move
        assert_eq!(toggler.current(), Language::Es);
    }
}
