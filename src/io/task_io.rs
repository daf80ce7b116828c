use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::row::TaskRecord;
use crate::ops::task_ops::TaskList;

/// Default task snapshot file name
pub const TASKS_FILE: &str = "tasks.json";

/// Error type for reading and writing the task snapshot
#[derive(Debug, thiserror::Error)]
pub enum TaskIoError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the task list: a JSON array of records as the task API returns
/// them. A missing file is an empty list.
pub fn read_tasks(path: &Path) -> Result<TaskList, TaskIoError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TaskList::new()),
        Err(e) => {
            return Err(TaskIoError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let records: Vec<TaskRecord> =
        serde_json::from_str(&text).map_err(|e| TaskIoError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(TaskList::from_records(records))
}

/// Write the task list back, replacing the file atomically.
pub fn write_tasks(path: &Path, tasks: &TaskList) -> Result<(), TaskIoError> {
    let write_err = |e: io::Error| TaskIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    let content = serde_json::to_string_pretty(&tasks.records())
        .map_err(io::Error::from)
        .map_err(write_err)?;
    atomic_write(path, content.as_bytes()).map_err(write_err)
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
