use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Snapshot the workspace into the object store.
    ///
    /// Walks the working directory depth-first, persisting every blob and
    /// tree as it is discovered, and reports the root tree's digest. The
    /// first error aborts the walk; objects persisted before it remain on
    /// disk and a re-run picks up where the failure left off.
    pub fn commit(&mut self) -> anyhow::Result<()> {
        let tree = Tree::snapshot(self.workspace(), self.database())?;

        write!(self.writer(), "{}", tree.digest()?)?;

        Ok(())
    }
}
