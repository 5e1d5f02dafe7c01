//! Child record of a tree object
//!
//! A tree does not hold its children: once a child is persisted, all that
//! remains of it is the `(kind, digest, name)` record the parent serializes
//! into its own content. The name is metadata for the parent only — it never
//! takes part in the child's identity.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;

/// One line of a tree object's serialized content.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Record {
    kind: ObjectType,
    oid: ObjectId,
    name: String,
}

impl Record {
    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the record as its tree-content line: `<kind> <digest>\t<name>\n`
    pub fn serialize(&self) -> String {
        format!("{} {}\t{}\n", self.kind.as_str(), self.oid, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_one_line_per_child() {
        let record = Record::new(
            ObjectType::Blob,
            ObjectId::from_content(b"hello"),
            "a.txt".to_string(),
        );

        assert_eq!(
            record.serialize(),
            "blob aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d\ta.txt\n"
        );
    }
}
