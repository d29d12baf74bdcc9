use super::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded language flip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleEvent {
    pub from: Language,
    pub to: Language,
    pub at: DateTime<Utc>,
}

impl ToggleEvent {
    pub fn new(from: Language, to: Language) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }

    /// Format for the interactive history view
    pub fn format(&self) -> String {
        format!(
            "[{}] {} → {}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.from.native_name(),
            self.to.native_name()
        )
    }
}
