use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Hash one file and optionally persist it as a blob.
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let content = self
            .workspace()
            .read_file(object_path.as_ref())
            .context(format!("Unable to read {object_path}"))?;

        let source_name = Path::new(object_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let blob = Blob::from_bytes(content, source_name);
        let object_id = blob.digest()?.clone();

        write!(self.writer(), "{object_id}")?;

        if !write {
            return Ok(());
        }

        self.database().store(&object_id, blob.content())?;

        Ok(())
    }
}
