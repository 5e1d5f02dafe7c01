//! Blob object
//!
//! Blobs store file content. They contain only the raw bytes — the file's
//! name lives in the parent tree's record, so two files with identical bytes
//! are one and the same blob.

use crate::artifacts::core::ObjectError;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::path::Path;

/// One file's content at the time it was read.
///
/// The digest is computed once at construction and never again; the content
/// is held only until the blob has been persisted.
#[derive(Debug, Clone)]
pub struct Blob {
    source_name: String,
    content: Bytes,
    digest: ObjectId,
}

impl Blob {
    /// Read a file fully into memory and hash it.
    ///
    /// Fails with `SourceUnreadable` if the file cannot be opened or fully
    /// read; a partially read blob is never constructed.
    pub fn from_file(path: &Path) -> Result<Self, ObjectError> {
        let content = std::fs::read(path).map_err(|source| ObjectError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::from_bytes(content.into(), source_name))
    }

    /// Build a blob from bytes already in memory (`hash-object` input).
    pub fn from_bytes(content: Bytes, source_name: String) -> Self {
        let digest = ObjectId::from_content(&content);

        Blob {
            source_name,
            content,
            digest,
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Object for Blob {
    fn kind(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn name(&self) -> &str {
        &self.source_name
    }

    fn digest(&self) -> Result<&ObjectId, ObjectError> {
        Ok(&self.digest)
    }
}
