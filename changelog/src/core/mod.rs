//! Deterministic, pure logic for changelog entries.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod category;
pub mod entry;
pub mod filename;
pub mod root;
pub mod validate;
