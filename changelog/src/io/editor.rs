//! Editor abstraction for reviewing a drafted entry.
//!
//! The [`Editor`] trait lets entry creation hand the serialized draft to the
//! user and get the final text back. `Ok(None)` is the user aborting.

use std::fs;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Editor used when neither the config nor the environment names one.
pub const FALLBACK_EDITOR: &str = "vi";

pub trait Editor {
    fn edit(&self, draft: &str) -> Result<Option<String>>;
}

/// Returns the draft untouched (`--no-editor`).
pub struct Passthrough;

impl Editor for Passthrough {
    fn edit(&self, draft: &str) -> Result<Option<String>> {
        Ok(Some(draft.to_string()))
    }
}

/// Opens the draft in an external editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    command: Vec<String>,
}

impl CommandEditor {
    pub fn new(command: Vec<String>) -> Result<Self> {
        if command.is_empty() || command[0].trim().is_empty() {
            return Err(anyhow!("editor command is empty"));
        }
        Ok(Self { command })
    }

    /// Use `configured` if set, otherwise `$VISUAL`, `$EDITOR`, then `vi`.
    pub fn resolve(configured: Option<&str>) -> Result<Self> {
        Self::resolve_with(configured, |key| std::env::var(key).ok())
    }

    pub fn resolve_with(
        configured: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if let Some(command) = configured {
            let parts = shell_words::split(command)
                .with_context(|| format!("parse editor command: {command}"))?;
            return Self::new(parts);
        }
        for var in ["VISUAL", "EDITOR"] {
            let Some(value) = lookup(var) else { continue };
            if value.trim().is_empty() {
                continue;
            }
            if let Ok(parts) = shell_words::split(&value)
                && !parts.is_empty()
            {
                return Self::new(parts);
            }
        }
        Self::new(vec![FALLBACK_EDITOR.to_string()])
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl Editor for CommandEditor {
    #[instrument(skip_all, fields(editor = %self.command[0]))]
    fn edit(&self, draft: &str) -> Result<Option<String>> {
        let path = tempfile::Builder::new()
            .prefix("changelog-entry-")
            .suffix(".yml")
            .tempfile()
            .context("create draft file")?
            .into_temp_path();
        fs::write(&path, draft).with_context(|| format!("write draft {}", path.display()))?;

        debug!(draft = %path.display(), "opening editor");
        let status = Command::new(&self.command[0])
            .args(&self.command[1..])
            .arg(path.as_os_str())
            .status()
            .with_context(|| format!("spawn editor {}", self.command[0]))?;
        if !status.success() {
            return Err(anyhow!("editor {} exited with {status}", self.command[0]));
        }

        let edited =
            fs::read_to_string(&path).with_context(|| format!("read draft {}", path.display()))?;
        if edited.trim().is_empty() {
            debug!("editor returned an empty draft");
            return Ok(None);
        }
        Ok(Some(edited))
    }
}
