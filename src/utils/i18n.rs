use crate::models::Language;
use std::sync::OnceLock;

static CURRENT_LANGUAGE: OnceLock<String> = OnceLock::new();

/// Initialize and set the UI language for the tool's own messages
///
/// This is the chrome locale only; the page's display language always starts
/// in Spanish and is flipped by the toggle control.
pub fn set_language() {
    let lang = detect_system_language().unwrap_or_else(|| "en".to_string());

    CURRENT_LANGUAGE.set(lang.clone()).ok();
    rust_i18n::set_locale(&lang);

    tracing::info!("UI language set to: {}", lang);
}

/// Get current UI language
pub fn current_language() -> String {
    CURRENT_LANGUAGE
        .get()
        .cloned()
        .unwrap_or_else(|| rust_i18n::locale().to_string())
}

/// Detect UI language from environment
fn detect_system_language() -> Option<String> {
    std::env::var("LANG").ok().map(|lang| {
        // Parse LANG environment variable (e.g., "es_MX.UTF-8" -> "es")
        if lang.starts_with("es") {
            "es".to_string()
        } else {
            "en".to_string()
        }
    })
}

/// Get available UI languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        (Language::Es.code(), Language::Es.native_name()),
        (Language::En.code(), Language::En.native_name()),
    ]
}
