//! I/O helpers for entry creation.

pub mod config;
pub mod editor;
pub mod entry_store;
pub mod git;
pub mod project;
pub mod prompt;
