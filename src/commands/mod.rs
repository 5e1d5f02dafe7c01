//! Command implementations
//!
//! Organized into two categories following Git's architecture:
//!
//! - `plumbing`: low-level commands for direct object manipulation
//!   (hash-object, cat-file)
//! - `porcelain`: user-facing commands (init, commit, config)
//!
//! Each command is implemented as a method on `Repository`, writing its
//! output through the repository's writer.

pub mod plumbing;
pub mod porcelain;
