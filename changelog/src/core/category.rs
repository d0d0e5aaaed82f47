//! Fixed set of change categories.
//!
//! The order of [`Category::ALL`] is the display order of the interactive
//! menu, so `index()` is 1-based and stable. Stored entries only ever carry
//! the lowercase [`Category::key`], never the index or the title.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// Number of known categories.
pub const CATEGORY_COUNT: usize = 8;

/// Classification of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Added,
    Fixed,
    Changed,
    Deprecated,
    Removed,
    Security,
    Performance,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Added,
        Category::Fixed,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Security,
        Category::Performance,
        Category::Other,
    ];

    /// 1-based position in the display order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|category| *category == self)
            .map_or(0, |pos| pos + 1)
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Added => "added",
            Category::Fixed => "fixed",
            Category::Changed => "changed",
            Category::Deprecated => "deprecated",
            Category::Removed => "removed",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Other => "other",
        }
    }

    /// Human label shown in the interactive menu.
    pub fn title(self) -> &'static str {
        match self {
            Category::Added => "New feature",
            Category::Fixed => "Bug fix",
            Category::Changed => "Feature change",
            Category::Deprecated => "New deprecation",
            Category::Removed => "Feature removal",
            Category::Security => "Security fix",
            Category::Performance => "Performance improvement",
            Category::Other => "Other",
        }
    }

    /// Look up a category by its 1-based display index.
    pub fn by_index(index: i64) -> Result<Category, EntryError> {
        usize::try_from(index)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|pos| Self::ALL.get(pos).copied())
            .ok_or_else(|| EntryError::CategoryIndexOutOfRange {
                index: index.to_string(),
                max: CATEGORY_COUNT,
            })
    }

    /// Look up a category by key, ignoring ASCII case.
    pub fn by_name(name: &str) -> Result<Category, EntryError> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| EntryError::UnknownCategory {
                name: name.to_string(),
                valid: Self::values().join(", "),
            })
    }

    /// Category keys in display order.
    pub fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|category| category.key()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Render the numbered menu used when prompting for a category.
pub fn category_menu() -> String {
    Category::ALL
        .iter()
        .map(|category| format!("{}. {}", category.index(), category.title()))
        .collect::<Vec<_>>()
        .join("\n")
}
