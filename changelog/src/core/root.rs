//! Choosing the repository root from VCS answers.
//!
//! Answers are raw bytes as printed by git; paths are rebuilt from them
//! without decoding so non-UTF-8 directories survive.

use std::path::PathBuf;

/// Pick the root entries are filed under.
///
/// A non-empty superproject working tree wins: entries for a submodule live
/// in its superproject. Otherwise the toplevel working tree is used. Returns
/// `None` when both answers are empty.
pub fn choose_root(superproject: Option<&[u8]>, toplevel: Option<&[u8]>) -> Option<PathBuf> {
    [superproject, toplevel]
        .into_iter()
        .flatten()
        .map(clean_path_output)
        .find(|path| !path.is_empty())
        .map(path_from_bytes)
}

/// Strip the line terminator git prints after a path.
pub fn clean_path_output(raw: &[u8]) -> &[u8] {
    let end = raw
        .iter()
        .rposition(|byte| !matches!(byte, b'\n' | b'\r'))
        .map_or(0, |last| last + 1);
    &raw[..end]
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
