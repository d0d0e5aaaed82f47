//! Entry file naming.

use crate::error::EntryError;

/// Extension of stored entries.
pub const ENTRY_FILE_EXTENSION: &str = ".yml";

/// Longest basename tar archives keep portable.
pub const MAX_BASENAME_LENGTH: usize = 99;

/// Room left for the stem once the extension is accounted for.
pub const MAX_FILENAME_LENGTH: usize = MAX_BASENAME_LENGTH - ENTRY_FILE_EXTENSION.len();

/// Turn a validated title into an entry file name.
///
/// Spaces become hyphens, the result is lower-cased and cut to
/// `MAX_FILENAME_LENGTH - 1` characters before the extension is appended.
/// Downstream tooling relies on that exact bound.
pub fn derive_filename(title: &str) -> String {
    let stem: String = title
        .replace(' ', "-")
        .to_lowercase()
        .chars()
        .take(MAX_FILENAME_LENGTH - 1)
        .collect();
    format!("{stem}{ENTRY_FILE_EXTENSION}")
}

/// True when `name` stays inside the directory it is joined to.
///
/// Only separators (and NUL) need checking: a derived name always ends in
/// [`ENTRY_FILE_EXTENSION`], so it is never empty, `.` or `..`.
pub fn is_plain_filename(name: &str) -> bool {
    !name.contains(['/', '\\', '\0'])
}

/// Derive the file name for `title`, rejecting names that would leave the
/// entries directory.
pub fn checked_filename(title: &str) -> Result<String, EntryError> {
    let filename = derive_filename(title);
    if !is_plain_filename(&filename) {
        return Err(EntryError::UnsafeFilename {
            title: title.to_string(),
        });
    }
    Ok(filename)
}
