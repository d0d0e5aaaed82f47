//! Optional project configuration stored in `.changelog.toml` at the root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Changelog tool configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Editor command (shell-words syntax), overriding `$VISUAL`/`$EDITOR`.
    pub editor: Option<String>,

    /// Open the editor unless `--no-editor` is given.
    pub open_editor: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            editor: None,
            open_editor: true,
        }
    }
}

impl ChangelogConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(editor) = &self.editor {
            let parts = shell_words::split(editor)
                .map_err(|err| anyhow!("editor must be a valid command line: {err}"))?;
            if parts.is_empty() {
                return Err(anyhow!("editor must not be empty"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ChangelogConfig::default()`.
pub fn load_config(path: &Path) -> Result<ChangelogConfig> {
    if !path.exists() {
        return Ok(ChangelogConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ChangelogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
