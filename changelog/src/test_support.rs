//! Test-only fakes and fixtures for entry creation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::error::EntryError;
use crate::io::editor::Editor;
use crate::io::project::RootResolver;
use crate::io::prompt::{Prompter, parse_confirmation};

/// Resolver returning a fixed root, or no root at all.
pub struct StaticRoot(Option<PathBuf>);

impl StaticRoot {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self(Some(root.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl RootResolver for StaticRoot {
    fn resolve_root(&self) -> Result<PathBuf> {
        self.0.clone().ok_or_else(|| {
            EntryError::NoRepository {
                detail: "no repository in test".to_string(),
            }
            .into()
        })
    }
}

/// Prompter that replays scripted answers and records what it was asked.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and notice, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Scripted answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        self.transcript.push(message.to_string());
        Ok(self.answers.pop_front())
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.transcript.push(message.to_string());
        let answer = self.answers.pop_front().unwrap_or_default();
        parse_confirmation(&answer).ok_or_else(|| anyhow!("unscripted confirmation '{answer}'"))
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}

/// Editor returning a fixed result and remembering the draft it was given.
pub struct ScriptedEditor {
    result: Option<String>,
    drafts: RefCell<Vec<String>>,
}

impl ScriptedEditor {
    pub fn returning(content: &str) -> Self {
        Self {
            result: Some(content.to_string()),
            drafts: RefCell::new(Vec::new()),
        }
    }

    /// Simulates the user closing the editor on an empty buffer.
    pub fn aborting() -> Self {
        Self {
            result: None,
            drafts: RefCell::new(Vec::new()),
        }
    }

    pub fn drafts(&self) -> Vec<String> {
        self.drafts.borrow().clone()
    }
}

impl Editor for ScriptedEditor {
    fn edit(&self, draft: &str) -> Result<Option<String>> {
        self.drafts.borrow_mut().push(draft.to_string());
        Ok(self.result.clone())
    }
}

/// Throwaway git repository with one empty commit.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create repo tempdir")?;
        git(dir.path(), &["init", "-q"])?;
        git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "init"])?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn entries_dir(&self) -> PathBuf {
        self.path().join("releases").join("unreleased")
    }

    /// Add a fresh repository as submodule `name`.
    ///
    /// Returns the submodule's origin (keep it alive) and its checkout path.
    pub fn add_submodule(&self, name: &str) -> Result<(TestRepo, PathBuf)> {
        let origin = TestRepo::new()?;
        let origin_path = origin
            .path()
            .to_str()
            .ok_or_else(|| anyhow!("non-utf8 tempdir"))?
            .to_string();
        git(self.path(), &["submodule", "add", "-q", &origin_path, name])?;
        git(self.path(), &["commit", "-q", "-m", "add submodule"])?;
        Ok((origin, self.path().join(name)))
    }
}

/// Run git with a fixed identity, failing on non-zero exit.
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Changelog Tests",
            "-c",
            "user.email=tests@example.com",
            "-c",
            "init.defaultBranch=main",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "protocol.file.allow=always",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("spawn git {}", args.join(" ")))?;
    if !output.status.success() {
        return Err(anyhow!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
