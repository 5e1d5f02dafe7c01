//! Object database
//!
//! Persists hashed objects under a two-level sharded layout: the first two
//! characters of the digest name the shard directory, the remaining
//! thirty-eight name the file inside it. The layout is the store's only
//! durable contract; files hold the raw object bytes.

use crate::artifacts::core::StoreError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist one object's bytes under its digest-derived path.
    ///
    /// The storage root must already exist; creating it is `init`'s job, not
    /// the database's. The shard directory is created idempotently. If the
    /// object file itself already exists the put is a no-op: content is
    /// addressed by its own hash, so the file is assumed byte-identical and
    /// no verification re-read is performed. The flip side is that a partial
    /// write left behind by a crash occupies the correct name and is never
    /// repaired by re-running the walk.
    pub fn store(&self, object_id: &ObjectId, content: &Bytes) -> Result<(), StoreError> {
        if !self.path.is_dir() {
            return Err(StoreError::StoreUnavailable {
                path: self.path.to_path_buf(),
            });
        }

        let object_path = self.path.join(object_id.to_path());
        if object_path.exists() {
            debug!(oid = %object_id, "object already present, skipping write");
            return Ok(());
        }

        if let Some(shard_dir) = object_path.parent() {
            std::fs::create_dir_all(shard_dir).map_err(|source| StoreError::PersistFailed {
                path: shard_dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&object_path, content).map_err(|source| StoreError::PersistFailed {
            path: object_path.clone(),
            source,
        })?;

        debug!(oid = %object_id, path = %object_path.display(), "stored object");

        Ok(())
    }

    /// Read one object's raw bytes back.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        let content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(content.into())
    }

    /// Find all objects whose digest starts with the given prefix.
    ///
    /// Used to resolve abbreviated digests to their full form. For prefixes
    /// of two or more characters only the matching shard directory is
    /// scanned; shorter prefixes scan every shard.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        if prefix.len() >= 2 {
            let dir_name = &prefix[..2];
            let file_prefix = &prefix[2..];
            let dir_path = self.path.join(dir_name);

            if dir_path.is_dir() {
                for entry in std::fs::read_dir(&dir_path)? {
                    let file_name = entry?.file_name();
                    let file_name = file_name.to_string_lossy();

                    if file_name.starts_with(file_prefix) {
                        matches.push(ObjectId::try_parse(format!("{dir_name}{file_name}"))?);
                    }
                }
            }
        } else {
            for shard in 0..=255 {
                let dir_name = format!("{shard:02x}");
                let dir_path = self.path.join(&dir_name);

                if !dir_path.is_dir() {
                    continue;
                }

                for entry in std::fs::read_dir(&dir_path)? {
                    let file_name = entry?.file_name();
                    let full_oid = format!("{dir_name}{}", file_name.to_string_lossy());

                    if full_oid.starts_with(prefix) {
                        matches.push(ObjectId::try_parse(full_oid)?);
                    }
                }
            }
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    fn database_in(dir: &TempDir) -> Database {
        let objects_path = dir.path().join("objects");
        std::fs::create_dir_all(&objects_path).unwrap();
        Database::new(objects_path.into_boxed_path())
    }

    #[test]
    fn stores_under_the_sharded_path() {
        let dir = TempDir::new().unwrap();
        let database = database_in(&dir);
        let content = Bytes::from_static(b"hello");
        let oid = ObjectId::from_content(&content);

        database.store(&oid, &content).unwrap();

        let object_path = database
            .objects_path()
            .join("aa")
            .join("f4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
        assert_eq!(std::fs::read(object_path).unwrap(), b"hello");
    }

    #[test]
    fn missing_root_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let database = Database::new(dir.path().join("objects").into_boxed_path());
        let content = Bytes::from_static(b"hello");

        let result = database.store(&ObjectId::from_content(&content), &content);

        assert!(matches!(result, Err(StoreError::StoreUnavailable { .. })));
    }

    #[test]
    fn existing_object_is_trusted_and_left_untouched() {
        let dir = TempDir::new().unwrap();
        let database = database_in(&dir);
        let content = Bytes::from_static(b"hello");
        let oid = ObjectId::from_content(&content);

        // plant different bytes at the digest's path; the skip-if-exists
        // policy must not touch them
        let object_path = database.objects_path().join(oid.to_path());
        std::fs::create_dir_all(object_path.parent().unwrap()).unwrap();
        std::fs::write(&object_path, b"planted").unwrap();

        database.store(&oid, &content).unwrap();

        assert_eq!(std::fs::read(&object_path).unwrap(), b"planted");
    }

    #[test]
    fn loads_stored_bytes_back() {
        let dir = TempDir::new().unwrap();
        let database = database_in(&dir);
        let content = Bytes::from_static(b"hello");
        let oid = ObjectId::from_content(&content);
        database.store(&oid, &content).unwrap();

        assert_eq!(database.load(&oid).unwrap(), content);
    }

    #[test]
    fn loading_a_missing_object_fails() {
        let dir = TempDir::new().unwrap();
        let database = database_in(&dir);

        assert!(database.load(&ObjectId::from_content(b"absent")).is_err());
    }

    #[test]
    fn finds_objects_by_prefix() {
        let dir = TempDir::new().unwrap();
        let database = database_in(&dir);
        let content = Bytes::from_static(b"hello");
        let oid = ObjectId::from_content(&content);
        database.store(&oid, &content).unwrap();

        let matches = database.find_objects_by_prefix("aaf4c61").unwrap();
        assert_eq!(matches, vec![oid.clone()]);

        let matches = database.find_objects_by_prefix("a").unwrap();
        assert_eq!(matches, vec![oid]);

        assert!(database.find_objects_by_prefix("ffff").unwrap().is_empty());
    }
}
