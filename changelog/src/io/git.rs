//! Git adapter for repository root resolution.
//!
//! Git is always invoked with an explicit, sanitized environment ([`GitEnv`])
//! so locale or pager settings of the caller cannot change what we parse.

use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::root::{choose_root, clean_path_output};
use crate::error::EntryError;
use crate::io::project::RootResolver;

/// Variables copied from the caller's environment when present.
const PASSTHROUGH_VARS: [&str; 4] = ["HTTP_PROXY", "HTTPS_PROXY", "NO_PROXY", "HOME"];

/// Environment handed to every git child process. Nothing else is inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitEnv {
    vars: Vec<(String, String)>,
}

impl GitEnv {
    /// Build from the current process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut vars = vec![
            ("LANG".to_string(), "C".to_string()),
            ("PAGER".to_string(), String::new()),
        ];
        for key in PASSTHROUGH_VARS {
            vars.push((key.to_string(), lookup(key).unwrap_or_default()));
        }
        // Needed to locate the git binary itself.
        if let Some(path) = lookup("PATH") {
            vars.push(("PATH".to_string(), path));
        }
        Self { vars }
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

const SUPERPROJECT_QUERY: [&str; 2] = ["rev-parse", "--show-superproject-working-tree"];
const TOPLEVEL_QUERY: [&str; 2] = ["rev-parse", "--show-toplevel"];

/// Answer to a single git query. Stdout stays raw bytes; it carries paths.
struct Answer {
    stdout: Vec<u8>,
    stderr: String,
    success: bool,
}

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
    env: GitEnv,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>, env: GitEnv) -> Self {
        Self {
            workdir: workdir.into(),
            env,
        }
    }

    fn query(&self, args: &[&str]) -> Result<Answer> {
        let output = self.run(args)?;
        let answer = Answer {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            stdout: output.stdout,
            success: output.status.success(),
        };
        if answer.success {
            let stdout = String::from_utf8_lossy(&answer.stdout);
            debug!(args = %args.join(" "), stdout = %stdout.trim_end(), "git answered");
        } else {
            debug!(args = %args.join(" "), stderr = %answer.stderr, "git query failed");
        }
        Ok(answer)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .env_clear()
            .envs(self.env.vars().iter().map(|(k, v)| (k, v)))
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}

impl RootResolver for Git {
    /// Superproject working tree if any, else the toplevel working tree.
    #[instrument(skip_all, fields(workdir = %self.workdir.display()))]
    fn resolve_root(&self) -> Result<PathBuf> {
        let superproject = self.query(&SUPERPROJECT_QUERY)?;
        let in_submodule =
            successful(&superproject).is_some_and(|out| !clean_path_output(out).is_empty());
        // The toplevel is only asked for when there is no superproject.
        let toplevel = if in_submodule {
            None
        } else {
            Some(self.query(&TOPLEVEL_QUERY)?)
        };

        if let Some(root) = choose_root(
            successful(&superproject),
            toplevel.as_ref().and_then(successful),
        ) {
            debug!(root = %root.display(), in_submodule, "repository root resolved");
            return Ok(root);
        }
        let detail = toplevel
            .map(|answer| answer.stderr)
            .filter(|stderr| !stderr.is_empty())
            .unwrap_or_else(|| {
                format!("{} is not inside a git working tree", self.workdir.display())
            });
        Err(EntryError::NoRepository { detail }.into())
    }
}

fn successful(answer: &Answer) -> Option<&[u8]> {
    answer.success.then_some(answer.stdout.as_slice())
}
