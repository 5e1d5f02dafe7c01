//! Tree object and the recursive directory snapshot
//!
//! A tree represents one directory's content as an ordered sequence of child
//! records. Its digest is the hash of the serialized record buffer, so it
//! depends on nothing but the children's kinds, digests and names — in
//! listing order, which is always lexicographic regardless of what the
//! filesystem returns.
//!
//! ## Snapshotting
//!
//! `Tree::snapshot` walks a directory depth-first. Every child is persisted
//! the moment it is constructed, before its record is appended to the
//! parent: construction and storage are a single interleaved pass, so a
//! failure partway through leaves the already-written children durable.
//! There is no rollback; re-running the walk skips completed objects.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::ObjectError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::record::Record;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

/// Ceiling on directory recursion, counted from the walk root at depth 0.
///
/// A hard stop for pathological nesting, not a retry.
pub const MAX_SNAPSHOT_DEPTH: usize = 100;

/// One directory's content: the ordered records of its children.
///
/// The digest is set once all children are known and never recomputed.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    dir_name: String,
    entries: Vec<Record>,
    digest: Option<ObjectId>,
}

impl Tree {
    /// Snapshot the workspace into the object store and return its root tree.
    ///
    /// The first error encountered aborts the walk and propagates up through
    /// every ancestor; objects persisted before the failure remain on disk.
    pub fn snapshot(workspace: &Workspace, database: &Database) -> Result<Self, ObjectError> {
        Self::snapshot_dir(workspace, database, workspace.path(), 0)
    }

    fn snapshot_dir(
        workspace: &Workspace,
        database: &Database,
        dir_path: &Path,
        depth: usize,
    ) -> Result<Self, ObjectError> {
        if depth >= MAX_SNAPSHOT_DEPTH {
            return Err(ObjectError::MaxDepthExceeded {
                path: dir_path.to_path_buf(),
                max: MAX_SNAPSHOT_DEPTH,
            });
        }

        debug!(dir = %dir_path.display(), depth, "snapshotting directory");

        let dir_name = dir_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let entry_paths =
            workspace
                .list_dir(dir_path)
                .map_err(|source| ObjectError::SourceUnreadable {
                    path: dir_path.to_path_buf(),
                    source,
                })?;

        // Children first: each one is persisted before its record joins the
        // parent's sequence, and the blob's content is dropped right after.
        let mut entries = Vec::with_capacity(entry_paths.len());
        for entry_path in entry_paths {
            let record = if entry_path.is_dir() {
                let subtree = Self::snapshot_dir(workspace, database, &entry_path, depth + 1)?;
                subtree.record()?
            } else {
                let blob = Blob::from_file(&entry_path)?;
                database.store(blob.digest()?, blob.content())?;
                blob.record()?
            };
            entries.push(record);
        }

        let mut tree = Tree {
            dir_name,
            entries,
            digest: None,
        };

        let content = tree.serialize();
        let digest = ObjectId::from_content(&content);
        database.store(&digest, &content)?;
        tree.digest = Some(digest);

        Ok(tree)
    }

    /// Serialize the ordered child records into the tree's content buffer.
    pub fn serialize(&self) -> Bytes {
        let mut buffer = String::new();
        for entry in &self.entries {
            buffer.push_str(&entry.serialize());
        }

        Bytes::from(buffer)
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }
}

impl Object for Tree {
    fn kind(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn name(&self) -> &str {
        &self.dir_name
    }

    fn digest(&self) -> Result<&ObjectId, ObjectError> {
        self.digest.as_ref().ok_or(ObjectError::NotReady)
    }
}
