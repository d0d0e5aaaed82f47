//! Orchestration for creating one changelog entry.
//!
//! One invocation runs strictly in sequence: collect and validate input,
//! make sure the entries directory exists, let the user review the draft,
//! then write it. Every validation happens before the filesystem is touched.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::category::{Category, category_menu};
use crate::core::entry::EntryRecord;
use crate::core::filename::checked_filename;
use crate::core::validate::{validate_category, validate_title};
use crate::error::EntryError;
use crate::io::editor::Editor;
use crate::io::entry_store::{ensure_directory, write_entry};
use crate::io::project::Project;
use crate::io::prompt::Prompter;

pub const TITLE_PROMPT: &str = ">> Please specify the title of your change";
pub const CATEGORY_PROMPT: &str = ">> Please specify the category of your change";

/// Input for a new entry. Missing title/category are asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntryRequest {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub author: Option<String>,
    pub pull_request: Option<String>,
    pub notes: Option<String>,
    /// Print the entry instead of writing it.
    pub dry_run: bool,
    /// Replace an existing entry with the same file name.
    pub overwrite: bool,
}

/// What a successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntryOutcome {
    Written { path: PathBuf, filename: String },
    DryRun { content: String },
}

/// Create (or, with `dry_run`, render) an entry for `project`.
pub fn create_entry(
    project: &Project,
    request: &NewEntryRequest,
    prompter: &mut dyn Prompter,
    editor: &dyn Editor,
) -> Result<NewEntryOutcome> {
    let title = match &request.title {
        Some(title) => validate_title(title)?,
        None => prompt_until_valid(prompter, TITLE_PROMPT, |raw| {
            let title = validate_title(raw)?;
            checked_filename(&title)?;
            Ok(title)
        })?,
    };
    let filename = checked_filename(&title)?;
    let category = match request.category {
        Some(category) => category,
        None => {
            let message = format!("{CATEGORY_PROMPT}\n\n{}\n", category_menu());
            prompt_until_valid(prompter, &message, validate_category)?
        }
    };
    debug!(%title, %category, "entry input collected");

    let record = EntryRecord::new(&title, category)?
        .with_author(request.author.clone())
        .with_pull_request(request.pull_request.clone())
        .with_notes(request.notes.clone());

    let dir = if request.dry_run {
        project.unreleased_changes_path.clone()
    } else {
        ensure_directory(&project.unreleased_changes_path, prompter)?
    };

    let draft = record.to_yaml().context("serialize entry")?;
    let content = editor
        .edit(&draft)?
        .filter(|content| !content.trim().is_empty())
        .ok_or(EntryError::EmptyContent)?;
    EntryRecord::parse(&content)?;

    if request.dry_run {
        return Ok(NewEntryOutcome::DryRun { content });
    }

    let path = write_entry(&dir, &title, &content, request.overwrite)?;
    info!(entry = %path.display(), "changelog entry created");
    Ok(NewEntryOutcome::Written { path, filename })
}

/// Ask until `validate` accepts the answer, reporting each rejection.
fn prompt_until_valid<T>(
    prompter: &mut dyn Prompter,
    message: &str,
    validate: impl Fn(&str) -> Result<T, EntryError>,
) -> Result<T> {
    loop {
        let answer = prompter
            .ask(message)?
            .ok_or_else(|| anyhow!("no input left while prompting"))?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => prompter.notify(&format!("Error: {err}"))?,
        }
    }
}
