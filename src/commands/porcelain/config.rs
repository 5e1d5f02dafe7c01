use crate::areas::config::{ConfigScope, resolve_config_path};
use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report which configuration file applies at the given scope.
    pub fn config(&mut self, scope: ConfigScope) -> anyhow::Result<()> {
        let config_path = resolve_config_path(scope, self.path())?;

        write!(self.writer(), "{}", config_path.display())?;

        Ok(())
    }
}
