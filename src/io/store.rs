use std::fs;
use std::path::{Path, PathBuf};

use crate::model::task::Task;

/// Name of the task file, kept next to the executable.
pub const DATA_FILE: &str = "todos.json";

/// Error type for task-file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed task file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not locate the executable directory")]
    NoExeDir,
}

/// Resolve the task file path: the directory of the running executable
/// joined with `todos.json`. Not configurable.
pub fn data_file_path() -> Result<PathBuf, StoreError> {
    let exe = std::env::current_exe().map_err(|_| StoreError::NoExeDir)?;
    let dir = exe.parent().ok_or(StoreError::NoExeDir)?;
    Ok(dir.join(DATA_FILE))
}

/// Load the task list. A missing file is an empty list; a file that exists
/// but does not parse is an error (fatal at startup, no repair).
pub fn load(path: &Path) -> Result<Vec<Task>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save the full task list, overwriting prior contents.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(tasks)?;
    fs::write(path, text).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
