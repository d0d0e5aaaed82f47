//! Entries directory management and entry file writes.
//!
//! Writes are staged in a hidden temporary file next to the target and then
//! renamed into place, so a reader never sees a half-written entry. Without
//! `overwrite` the rename refuses to clobber; collision detection is a
//! filesystem check at write time, not a lock.

use std::fs::{self, DirBuilder};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::core::filename::checked_filename;
use crate::error::EntryError;
use crate::io::prompt::Prompter;

/// Make sure the entries directory exists, asking before creating it.
///
/// Declining is [`EntryError::DirectoryAborted`].
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn ensure_directory(dir: &Path, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    if dir.is_dir() {
        debug!("entries directory exists");
        return Ok(dir.to_path_buf());
    }
    if dir.exists() {
        return Err(anyhow::anyhow!(
            "{} exists but is not a directory",
            dir.display()
        ));
    }

    prompter.notify(&format!(
        "Changelog entries directory {} does not exist.",
        dir.display()
    ))?;
    if !prompter.confirm("Do you want to create it?")? {
        return Err(EntryError::DirectoryAborted.into());
    }

    create_entries_dir(dir)
        .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    info!("created entries directory");
    prompter.notify(&format!("New directory {} created", dir.display()))?;
    Ok(dir.to_path_buf())
}

fn create_entries_dir(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}

/// Store `content` as the entry for `title` inside `dir`.
///
/// Empty content is rejected before touching the filesystem. An existing
/// entry is only replaced when `overwrite` is set.
#[instrument(skip_all, fields(dir = %dir.display(), overwrite))]
pub fn write_entry(dir: &Path, title: &str, content: &str, overwrite: bool) -> Result<PathBuf> {
    if content.trim().is_empty() {
        return Err(EntryError::EmptyContent.into());
    }

    let filename = checked_filename(title)?;
    let path = dir.join(&filename);
    if !overwrite && path.exists() {
        return Err(EntryError::EntryExists { filename }.into());
    }

    let mut builder = tempfile::Builder::new();
    builder.prefix(".").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut staged = builder
        .tempfile_in(dir)
        .with_context(|| format!("stage entry in {}", dir.display()))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .with_context(|| format!("write staged entry {}", staged.path().display()))?;

    if overwrite {
        staged
            .persist(&path)
            .map_err(|err| err.error)
            .with_context(|| format!("replace entry {}", path.display()))?;
    } else if let Err(err) = staged.persist_noclobber(&path) {
        if err.error.kind() == ErrorKind::AlreadyExists {
            return Err(EntryError::EntryExists { filename }.into());
        }
        return Err(err.error).with_context(|| format!("write entry {}", path.display()));
    }

    info!(entry = %filename, "entry written");
    Ok(path)
}
