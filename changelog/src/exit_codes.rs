//! Stable exit codes for the changelog CLI.

use crate::error::EntryError;

/// Entry written (or printed with `--dry-run`).
pub const OK: i32 = 0;
/// I/O failure or any other unclassified error.
pub const FAILURE: i32 = 1;
/// Invalid title, category or edited entry. Also clap's usage error status.
pub const INVALID_INPUT: i32 = 2;
/// No repository root could be resolved.
pub const NO_REPOSITORY: i32 = 3;
/// The user declined to create the entries directory.
pub const ABORTED: i32 = 4;
/// An entry with the same file name exists and `--overwrite` was not given.
pub const ENTRY_EXISTS: i32 = 5;
/// The entry content was empty after editing.
pub const EMPTY_ENTRY: i32 = 6;

/// Exit code for a typed entry error.
pub fn code_for(err: &EntryError) -> i32 {
    match err {
        EntryError::NoRepository { .. } => NO_REPOSITORY,
        EntryError::DirectoryAborted => ABORTED,
        EntryError::EntryExists { .. } => ENTRY_EXISTS,
        EntryError::EmptyContent => EMPTY_ENTRY,
        err if err.is_validation() => INVALID_INPUT,
        _ => FAILURE,
    }
}

/// Exit code for an error chain: the first [`EntryError`] found decides.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<EntryError>())
        .map_or(FAILURE, code_for)
}
