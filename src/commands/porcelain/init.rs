use crate::areas::repository::{METADATA_DIR, Repository};
use anyhow::Context;
use std::fs;
use std::io::Write;

const SCAFFOLD_DIRS: [&str; 4] = ["objects", "refs", "info", "hooks"];
const SCAFFOLD_FILES: [&str; 3] = ["HEAD", "config", "info/exclude"];

impl Repository {
    /// Create the metadata directory skeleton.
    ///
    /// Guarantees the storage root exists before any object is persisted.
    /// Idempotent: existing directories and marker files are left alone.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let metadata_path = self.path().join(METADATA_DIR);

        for dir in SCAFFOLD_DIRS {
            fs::create_dir_all(metadata_path.join(dir))
                .context(format!("Failed to create {METADATA_DIR}/{dir} directory"))?;
        }

        for file in SCAFFOLD_FILES {
            let file_path = metadata_path.join(file);
            if !file_path.exists() {
                fs::write(&file_path, b"")
                    .context(format!("Failed to create {METADATA_DIR}/{file} file"))?;
            }
        }

        write!(
            self.writer(),
            "Initialized empty Cask repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
