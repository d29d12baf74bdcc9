use thiserror::Error;

#[derive(Debug, Error)]
pub enum TogglerError {
    #[error("Toggle control not found in page")]
    ToggleControlMissing,

    #[error("Unsupported page format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse page: {0}")]
    PageParse(String),

    #[error("Failed to serialize page: {0}")]
    PageSerialize(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TogglerError>;

impl TogglerError {
    /// Returns a user-friendly error message (can be used with i18n)
    pub fn user_message(&self) -> String {
        match self {
            Self::ToggleControlMissing => {
                "The page has no toggle control (expected an element with id \"langToggle\")"
                    .to_string()
            }
            Self::UnsupportedFormat(ext) => {
                format!("Unsupported page format '{}', expected .toml or .json", ext)
            }
            Self::PageParse(reason) => format!("The page document could not be parsed: {}", reason),
            _ => self.to_string(),
        }
    }
}
