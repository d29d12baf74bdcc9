//! Integration tests for page document loading and saving

use lang_toggle::models::{Page, ToggleControl, TranslatableElement};
use lang_toggle::services::{LanguageToggler, PageService};
use lang_toggle::state::AppState;
use lang_toggle::utils::error::TogglerError;
use tempfile::TempDir;

fn demo_page() -> Page {
    Page::new("Demo")
        .with_element(TranslatableElement::text("Hola", "Hello").with_id("greeting"))
        .with_element(TranslatableElement::image("es.png", "en.png"))
        .with_toggle(ToggleControl::with_label("English"))
}

#[test]
fn test_toml_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.toml");

    PageService::save_page(&path, &demo_page()).unwrap();
    let loaded = PageService::load_page(&path).unwrap();

    assert_eq!(loaded, demo_page());
}

#[test]
fn test_json_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.json");

    PageService::save_page(&path, &demo_page()).unwrap();
    let loaded = PageService::load_page(&path).unwrap();

    assert_eq!(loaded, demo_page());
}

#[test]
fn test_saved_page_initializes_and_toggles() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.toml");
    PageService::save_page(&path, &demo_page()).unwrap();

    let mut page = PageService::load_page(&path).unwrap();
    let mut toggler = LanguageToggler::initialize(&mut page).unwrap();

    assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hola");
    toggler.toggle(&mut page);
    assert_eq!(page.element_by_id("greeting").unwrap().visible(), "Hello");
}

#[test]
fn test_app_state_open_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.toml");
    PageService::save_page(&path, &demo_page()).unwrap();

    let mut state = AppState::open(&path).unwrap();
    assert_eq!(state.source_name(), path.display().to_string());

    state.toggle();
    assert_eq!(state.toggle_label(), Some("Español"));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.html");
    std::fs::write(&path, "<html></html>").unwrap();

    let result = PageService::load_page(&path);
    assert!(matches!(result, Err(TogglerError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = PageService::load_page(std::path::Path::new("/does/not/exist.toml"));
    assert!(matches!(result, Err(TogglerError::IoError(_))));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[[element]]\ntype = \"sound\"").unwrap();

    let result = PageService::load_page(&path);
    assert!(matches!(result, Err(TogglerError::PageParse(_))));
}

#[test]
fn test_sample_page_survives_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.toml");

    PageService::save_page(&path, &Page::sample()).unwrap();
    let mut page = PageService::load_page(&path).unwrap();

    let toggler = LanguageToggler::initialize(&mut page).unwrap();
    assert_eq!(toggler.current().code(), "es");
    assert!(page.incomplete_elements().is_empty());
}
