//! Feature flags configuration
//!
//! Each flag adds one page to the deck. The Overview page is always present,
//! so the deck never ends up empty. The page set is fixed at startup - the
//! controller's page count never changes while it lives.

use serde::Deserialize;

/// Optional deck pages (opt-out: default enabled)
#[derive(Debug, Clone, Copy)]
pub struct Features {
    /// Gallery page: masonry layout demonstration
    pub gallery: bool,

    /// Calendar page: month grid navigation
    pub calendar: bool,

    /// Journal page: captured logs with debounced filtering
    pub journal: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            gallery: true,
            calendar: true,
            journal: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub gallery: Option<bool>,
    pub calendar: Option<bool>,
    pub journal: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            gallery: file.gallery.unwrap_or(true),
            calendar: file.calendar.unwrap_or(true),
            journal: file.journal.unwrap_or(true),
        }
    }
}
