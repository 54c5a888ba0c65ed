//! Config file storage
//!
//! Tasks live in a single table of a TOML document that usually holds other
//! things too (a `pyproject.toml` for instance). [`TaskDocument`] keeps the
//! whole document around so rewriting the tasks table leaves every other table
//! untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::configs::tasks::{parse_tasks_table, TaskMapping, TASKS_TABLE};
use crate::types::{YastaError, YastaResult};

/// A parsed config file together with its location on disk
#[derive(Debug, Clone)]
pub struct TaskDocument {
    path: PathBuf,
    document: toml::Table,
}

impl TaskDocument {
    /// Read and parse an existing config file
    pub fn open(path: impl Into<PathBuf>) -> YastaResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => YastaError::ConfigNotFound(path.clone()),
            _ => YastaError::Io(e),
        })?;
        debug!("Read config file {}", path.display());

        let document = content
            .parse::<toml::Table>()
            .map_err(|e| YastaError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { path, document })
    }

    /// Like [`TaskDocument::open`], but a missing file yields an empty document
    pub fn open_or_empty(path: impl Into<PathBuf>) -> YastaResult<Self> {
        let path = path.into();
        match Self::open(&path) {
            Err(YastaError::ConfigNotFound(_)) => Ok(Self {
                path,
                document: toml::Table::new(),
            }),
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_tasks(&self) -> bool {
        self.document.contains_key(TASKS_TABLE)
    }

    /// Decode the tasks table
    pub fn tasks(&self) -> YastaResult<TaskMapping> {
        let value = self
            .document
            .get(TASKS_TABLE)
            .cloned()
            .ok_or_else(|| YastaError::TasksTableMissing {
                path: self.path.clone(),
                table: TASKS_TABLE.to_string(),
            })?;

        parse_tasks_table(value).map_err(|e| YastaError::ConfigParse {
            path: self.path.clone(),
            message: format!("invalid [{}] table: {}", TASKS_TABLE, e),
        })
    }

    /// Replace the tasks table, keeping its position in the document
    pub fn set_tasks(&mut self, tasks: &TaskMapping) -> YastaResult<()> {
        let value = toml::Value::try_from(tasks)
            .map_err(|e| YastaError::Config(format!("Failed to encode tasks: {}", e)))?;
        self.document.insert(TASKS_TABLE.to_string(), value);
        Ok(())
    }

    /// Overwrite the file on disk with the current document
    pub fn write(&self) -> YastaResult<()> {
        let content = toml::to_string(&self.document)
            .map_err(|e| YastaError::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, content)?;
        debug!("Wrote config file {}", self.path.display());
        Ok(())
    }
}

/// Load the tasks table from the config file at `path`
pub fn load(path: &Path) -> YastaResult<TaskMapping> {
    TaskDocument::open(path)?.tasks()
}

/// Store `tasks` in the config file at `path`.
///
/// Other tables of an existing, parseable file are kept. A missing or
/// unparseable file is replaced by a document holding only the tasks table.
/// Returns `false` when the file could not be read or written.
pub fn save(path: &Path, tasks: &TaskMapping) -> bool {
    let Some(mut document) = document_for_save(path) else {
        return false;
    };

    match document.set_tasks(tasks).and_then(|_| document.write()) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save tasks to {}: {}", path.display(), e);
            false
        }
    }
}

/// The document `save` writes into, or `None` when the existing file must
/// not be overwritten
fn document_for_save(path: &Path) -> Option<TaskDocument> {
    match TaskDocument::open(path) {
        Ok(document) => Some(document),
        Err(YastaError::ConfigNotFound(_)) | Err(YastaError::ConfigParse { .. }) => {
            Some(TaskDocument {
                path: path.to_path_buf(),
                document: toml::Table::new(),
            })
        }
        Err(e) => {
            warn!("Refusing to overwrite {}: {}", path.display(), e);
            None
        }
    }
}
