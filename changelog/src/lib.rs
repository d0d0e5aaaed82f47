//! Authoring of unreleased changelog entries.
//!
//! An entry is a small YAML document filed under `releases/unreleased/` at the
//! repository root, later aggregated into the changelog by the release
//! process. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (categories, validation, entry
//!   serialization, file naming). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (git, filesystem, prompting, the
//!   editor). Each sits behind a small trait or function so tests can swap it.
//!
//! [`create`] coordinates the two to implement the CLI command.

pub mod core;
pub mod create;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
