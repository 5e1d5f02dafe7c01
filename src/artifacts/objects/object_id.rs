//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character hexadecimal strings identifying every object
//! in the store by the hash of its own bytes. Blobs and trees share one flat
//! keyspace: the same hash function covers both.
//!
//! ## Storage
//!
//! Objects are stored at `.cask/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Content digest used as an object's identity.
///
/// A 40-character lowercase hexadecimal SHA-1 string. Two byte sequences are
/// the same object exactly when their digests are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Hash a byte sequence into its object ID.
    ///
    /// Deterministic and side-effect free. This is the single hash entry
    /// point for the whole store: blob content and serialized tree buffers
    /// go through here alike.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        ObjectId(hex::encode(hasher.finalize()))
    }

    /// Parse and validate an object ID from its textual form.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Convert to the sharded storage path for this object.
    ///
    /// Splits the digest as `XX/YYYYYY...` where XX is the first 2 chars,
    /// bounding the number of entries in the top-level objects directory.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hashes_known_content() {
        let oid = ObjectId::from_content(b"hello");

        assert_eq!(oid.as_ref(), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    }

    #[test]
    fn hashes_empty_content() {
        let oid = ObjectId::from_content(b"");

        assert_eq!(oid.as_ref(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn splits_digest_into_sharded_path() {
        let oid = ObjectId::from_content(b"hello");

        assert_eq!(
            oid.to_path(),
            PathBuf::from("aa").join("f4c61ddcc5e8a2dabede0f3b482cd9aea9434d")
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(40)).is_err());
    }

    proptest! {
        #[test]
        fn equal_content_hashes_equally(content in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(
                ObjectId::from_content(&content),
                ObjectId::from_content(&content)
            );
        }

        #[test]
        fn distinct_content_hashes_distinctly(
            left in proptest::collection::vec(any::<u8>(), 0..512),
            right in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            prop_assume!(left != right);
            prop_assert_ne!(ObjectId::from_content(&left), ObjectId::from_content(&right));
        }
    }
}
