//! Persisting finished artifacts.
//!
//! Documents are assembled entirely in memory, then written through a
//! temporary file in the destination directory and renamed into place. A
//! reader of the output directory sees either the complete artifact or
//! nothing, and two writers of different artifacts never share a temp file.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid artifact file name: {0:?}")]
    InvalidName(String),
}

/// Write `bytes` to `dir/filename` atomically, creating `dir` if needed.
///
/// `filename` must be a single path component.
pub fn write_artifact(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\'])
    {
        return Err(StorageError::InvalidName(filename.to_string()));
    }

    let target = dir.join(filename);
    let io_err = |source| StorageError::Io {
        path: target.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;
    Ok(target)
}
