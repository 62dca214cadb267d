//! Connection configuration for the row store.
//!
//! The configuration names a base directory plus two filenames relative to
//! it: the database file and the bootstrap schema script that is executed
//! once, only when the database file is created fresh. The YAML keys are
//! the externally mandated spaced names:
//!
//! ```yaml
//! project dir: /srv/app
//! db config: schema.sql
//! db file: app.db
//! ```

use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Connection parameters consumed by [`RowStore::open`](crate::RowStore::open).
///
/// # Examples
///
/// ```no_run
/// use rowstore_sqlite::StoreConfig;
///
/// let config = StoreConfig::load("store.yaml").unwrap();
/// config.validate().unwrap();
/// println!("database at {}", config.database_path().unwrap().display());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base directory holding the database file and bootstrap script.
    #[serde(rename = "project dir")]
    pub project_dir: PathBuf,
    /// Bootstrap schema script filename, relative to the project directory.
    #[serde(rename = "db config")]
    pub db_config: String,
    /// Database filename, relative to the project directory.
    #[serde(rename = "db file")]
    pub db_file: String,
}

impl StoreConfig {
    /// Builds a configuration from its three parts.
    pub fn new(
        project_dir: impl Into<PathBuf>,
        db_config: impl Into<String>,
        db_file: impl Into<String>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            db_config: db_config.into(),
            db_file: db_file.into(),
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read, or
    /// [`StoreError::Configuration`] if a required key is absent or
    /// malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config =
            serde_yaml::from_reader(reader).map_err(|e| StoreError::Configuration(e.to_string()))?;
        Ok(config)
    }

    /// Checks that no configured name is empty.
    ///
    /// Whether the bootstrap script actually exists is checked by
    /// [`RowStore::open`](crate::RowStore::open), and only when the script
    /// is needed (the database file does not exist yet).
    pub fn validate(&self) -> Result<()> {
        if self.project_dir.as_os_str().is_empty() {
            return Err(StoreError::Configuration(
                "'project dir' must not be empty".to_string(),
            ));
        }
        if self.db_config.is_empty() {
            return Err(StoreError::Configuration(
                "'db config' must not be empty".to_string(),
            ));
        }
        if self.db_file.is_empty() {
            return Err(StoreError::Configuration(
                "'db file' must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute path of the database file.
    pub fn database_path(&self) -> Result<PathBuf> {
        Ok(std::path::absolute(self.project_dir.join(&self.db_file))?)
    }

    /// Absolute path of the bootstrap schema script.
    pub fn bootstrap_path(&self) -> Result<PathBuf> {
        Ok(std::path::absolute(self.project_dir.join(&self.db_config))?)
    }
}
