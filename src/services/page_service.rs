use crate::models::Page;
use crate::utils::error::{Result, TogglerError};
use std::fs;
use std::path::Path;

/// Service for loading and saving page documents
pub struct PageService;

impl PageService {
    /// Load a page document, picking the parser by file extension
    pub fn load_page(path: &Path) -> Result<Page> {
        let content = fs::read_to_string(path)?;

        let page = match Self::extension(path).as_deref() {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| TogglerError::PageParse(e.to_string()))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| TogglerError::PageParse(e.to_string()))?,
            other => {
                return Err(TogglerError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                ))
            }
        };

        tracing::info!("Loaded page from {:?}", path);
        Ok(page)
    }

    /// Save a page document in the format matching the file extension
    pub fn save_page(path: &Path, page: &Page) -> Result<()> {
        let content = match Self::extension(path).as_deref() {
            Some("toml") => toml::to_string_pretty(page)
                .map_err(|e| TogglerError::PageSerialize(e.to_string()))?,
            Some("json") => serde_json::to_string_pretty(page)
                .map_err(|e| TogglerError::PageSerialize(e.to_string()))?,
            other => {
                return Err(TogglerError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                ))
            }
        };

        fs::write(path, content)?;
        tracing::info!("Saved page to {:?}", path);
        Ok(())
    }

    fn extension(path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.toml");

        let page = Page::sample();
        PageService::save_page(&path, &page).unwrap();
        let loaded = PageService::load_page(&path).unwrap();

        assert_eq!(loaded, page);
    }

    #[test]
    fn test_save_and_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.json");

        let page = Page::sample();
        PageService::save_page(&path, &page).unwrap();
        let loaded = PageService::load_page(&path).unwrap();

        assert_eq!(loaded, page);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.yaml");
        std::fs::write(&path, "title = \"x\"").unwrap();

        let result = PageService::load_page(&path);
        assert!(matches!(result, Err(TogglerError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        let result = PageService::load_page(&path);
        assert!(matches!(result, Err(TogglerError::IoError(_))));
    }

    #[test]
    fn test_malformed_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[[element]]\ntype = \"text\"\ndata-es = 42").unwrap();

        let result = PageService::load_page(&path);
        assert!(matches!(result, Err(TogglerError::PageParse(_))));
    }
}
