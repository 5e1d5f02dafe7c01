//! Content-addressed object types
//!
//! All content is stored as objects identified by SHA-1 digests. There are
//! two kinds:
//!
//! - **Blob**: one file's content (raw bytes)
//! - **Tree**: one directory's listing (kind, digest and name per child)
//!
//! Objects are immutable once hashed: any change in the underlying file
//! content produces a new object with a new digest.

pub mod blob;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod record;
pub mod tree;

/// Length of a SHA-1 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
