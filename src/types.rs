//! Shared types passed between the shell-side modules and the renderer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A locally readable photo plus the file name it was supplied under.
///
/// `filename` is what the inventory sheet records; `path` is where the
/// renderer reads pixels from. They usually agree, but an upload shell may
/// store files under generated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: PathBuf,
    pub filename: String,
}

impl ImageRef {
    /// Reference a file on disk, taking the display name from its last path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, filename }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
