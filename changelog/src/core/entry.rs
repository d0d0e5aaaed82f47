//! In-memory changelog entry and its YAML form.
//!
//! Field order in the serialized document is part of the on-disk contract:
//! `title`, `category`, `author`, `pull_request`, `notes`. Absent optional
//! fields are written as `null`, never omitted.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::core::category::Category;
use crate::core::validate::validate_title;
use crate::error::EntryError;

/// YAML document start marker written ahead of every entry.
const DOCUMENT_START: &str = "---\n";

/// One unreleased change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub title: String,
    pub category: Category,
    pub author: Option<String>,
    pub pull_request: Option<String>,
    pub notes: Option<String>,
}

/// Loosely-typed mirror of the document, used when reading entries back.
#[derive(Debug, Deserialize)]
struct RawEntry {
    title: Option<Value>,
    category: Option<Value>,
    #[serde(default)]
    author: Option<Value>,
    #[serde(default)]
    pull_request: Option<Value>,
    #[serde(default)]
    notes: Option<Value>,
}

impl EntryRecord {
    /// Build a record with no optional metadata.
    pub fn new(title: &str, category: Category) -> Result<Self, EntryError> {
        Ok(Self {
            title: validate_title(title)?,
            category,
            author: None,
            pull_request: None,
            notes: None,
        })
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_pull_request(mut self, pull_request: Option<String>) -> Self {
        self.pull_request = pull_request;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Serialize to the stored document form.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("{DOCUMENT_START}{body}"))
    }

    /// Parse a stored or edited document, enforcing the record invariants.
    pub fn parse(text: &str) -> Result<Self, EntryError> {
        let raw: RawEntry = serde_yaml::from_str(text).map_err(|err| EntryError::InvalidEntry {
            reason: err.to_string(),
        })?;

        let title = scalar(raw.title, "title")?.ok_or_else(|| EntryError::InvalidEntry {
            reason: "missing field `title`".to_string(),
        })?;
        let category = scalar(raw.category, "category")?.ok_or_else(|| {
            EntryError::InvalidEntry {
                reason: "missing field `category`".to_string(),
            }
        })?;
        let category = Category::by_name(category.trim()).map_err(|err| EntryError::InvalidEntry {
            reason: err.to_string(),
        })?;
        let record = EntryRecord::new(&title, category).map_err(|err| EntryError::InvalidEntry {
            reason: err.to_string(),
        })?;

        Ok(record
            .with_author(scalar(raw.author, "author")?)
            .with_pull_request(scalar(raw.pull_request, "pull_request")?)
            .with_notes(scalar(raw.notes, "notes")?))
    }
}

/// Accept `null`, strings, numbers and booleans; anything nested is rejected.
fn scalar(value: Option<Value>, field: &str) -> Result<Option<String>, EntryError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(EntryError::InvalidEntry {
            reason: format!("field `{field}` must be a scalar"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_declared_order_with_nulls() {
        let entry = EntryRecord::new("new change", Category::Added).expect("entry");
        assert_eq!(
            entry.to_yaml().expect("yaml"),
            "---\ntitle: new change\ncategory: added\nauthor: null\npull_request: null\nnotes: null\n"
        );
    }

    #[test]
    fn serializes_optional_fields_when_present() {
        let entry = EntryRecord::new("Speed up lookups", Category::Performance)
            .expect("entry")
            .with_author(Some("jdoe".to_string()))
            .with_pull_request(Some("128".to_string()))
            .with_notes(Some("Cache is warmed on start.".to_string()));
        let yaml = entry.to_yaml().expect("yaml");
        let keys: Vec<&str> = yaml
            .lines()
            .skip(1)
            .filter_map(|line| line.split_once(':').map(|(key, _)| key))
            .collect();
        assert_eq!(keys, ["title", "category", "author", "pull_request", "notes"]);
        assert!(yaml.contains("author: jdoe\n"));
        assert!(yaml.contains("pull_request: '128'\n"));
    }

    #[test]
    fn new_rejects_blank_title() {
        assert_eq!(
            EntryRecord::new(" \n", Category::Fixed),
            Err(EntryError::EmptyTitle)
        );
    }

    #[test]
    fn parse_reads_back_serialized_document() {
        let entry = EntryRecord::new("Drop Python 3.7", Category::Removed)
            .expect("entry")
            .with_notes(Some("Users must upgrade.".to_string()));
        let parsed = EntryRecord::parse(&entry.to_yaml().expect("yaml")).expect("parse");
        assert_eq!(parsed, entry);
    }

    #[test]
    fn parse_accepts_hand_edited_values() {
        let parsed = EntryRecord::parse(
            "title: '  Patch XSS '\ncategory: SECURITY\npull_request: 42\n",
        )
        .expect("parse");
        assert_eq!(parsed.title, "Patch XSS");
        assert_eq!(parsed.category, Category::Security);
        assert_eq!(parsed.pull_request.as_deref(), Some("42"));
        assert_eq!(parsed.author, None);
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let err = EntryRecord::parse("title: x\ncategory: misc\n").unwrap_err();
        assert!(matches!(err, EntryError::InvalidEntry { .. }));
        assert!(err.to_string().contains("valid options are"));
    }

    #[test]
    fn parse_rejects_blank_title() {
        let err = EntryRecord::parse("title: ''\ncategory: added\n").unwrap_err();
        assert!(err.to_string().contains("title cannot be empty"));
    }

    #[test]
    fn parse_rejects_nested_values() {
        let err = EntryRecord::parse("title: x\ncategory: added\nnotes: [a, b]\n").unwrap_err();
        assert!(err.to_string().contains("`notes`"));
    }
}
