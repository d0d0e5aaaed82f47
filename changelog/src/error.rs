//! Error taxonomy for entry authoring.
//!
//! Every condition the engine distinguishes has its own variant so callers can
//! map it to a stable exit status (see [`crate::exit_codes`]). Plain I/O
//! failures are not listed here; they travel as context-wrapped
//! `std::io::Error`s inside `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// Neither a superproject nor a toplevel working tree could be found.
    #[error("unable to resolve the repository root: {detail}")]
    NoRepository { detail: String },

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("category index {index} is out of range 1..{max}")]
    CategoryIndexOutOfRange { index: String, max: usize },

    #[error("unknown category '{name}'; valid options are {valid}")]
    UnknownCategory { name: String, valid: String },

    /// The derived file name would escape the entries directory.
    #[error("title '{title}' does not produce a usable file name")]
    UnsafeFilename { title: String },

    /// Edited content no longer describes a valid entry.
    #[error("invalid entry: {reason}")]
    InvalidEntry { reason: String },

    #[error("Changelog entries directory is needed to continue.")]
    DirectoryAborted,

    #[error("Changelog entry {filename} already exists. Use '--overwrite' to replace it.")]
    EntryExists { filename: String },

    #[error("Aborting due to empty entry content")]
    EmptyContent,
}

impl EntryError {
    /// True for errors caused by bad title/category/entry input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EntryError::EmptyTitle
                | EntryError::CategoryIndexOutOfRange { .. }
                | EntryError::UnknownCategory { .. }
                | EntryError::UnsafeFilename { .. }
                | EntryError::InvalidEntry { .. }
        )
    }
}
