use crate::areas::repository::Repository;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print a stored object's raw bytes.
    ///
    /// Accepts a full digest or an unambiguous prefix.
    pub fn cat_file(&mut self, sha: &str) -> anyhow::Result<()> {
        let object_id = self.resolve_object_id(sha)?;
        let content = self.database().load(&object_id)?;

        self.writer().write_all(&content)?;

        Ok(())
    }

    fn resolve_object_id(&self, sha: &str) -> anyhow::Result<ObjectId> {
        if sha.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(sha.to_string());
        }

        let mut matches = self.database().find_objects_by_prefix(sha)?;
        match matches.len() {
            0 => anyhow::bail!("Object {} not found in the object store", sha),
            1 => Ok(matches.remove(0)),
            _ => anyhow::bail!(
                "Ambiguous object prefix {} ({} candidates)",
                sha,
                matches.len()
            ),
        }
    }
}
