//! Session categories.

use serde::{Deserialize, Serialize};

/// Category a focus session is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General, uncategorized focus
    #[default]
    General,
    /// Studying
    Study,
    /// Programming work
    Coding,
    /// Project work
    Project,
    /// Reading
    Reading,
    /// Anything else
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Study,
        Self::Coding,
        Self::Project,
        Self::Reading,
        Self::Other,
    ];

    /// Parse a category from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "study" | "studying" | "s" => Self::Study,
            "coding" | "code" | "c" => Self::Coding,
            "project" | "p" => Self::Project,
            "reading" | "read" | "r" => Self::Reading,
            "other" | "o" => Self::Other,
            _ => Self::General,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Study => "Study",
            Self::Coding => "Coding",
            Self::Project => "Project",
            Self::Reading => "Reading",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
