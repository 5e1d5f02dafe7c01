//! A minimal content-addressable object store.
//!
//! Files and directories are turned into immutable, hash-identified objects
//! persisted under a fixed storage root (`.cask/objects`). The crate is
//! organized around three modules:
//!
//! - `areas`: repository components (object database, workspace, config)
//! - `artifacts`: object types and shared error types
//! - `commands`: subcommand implementations on top of `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
