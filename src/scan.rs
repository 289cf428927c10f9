//! Collecting photos from the command line.
//!
//! Arguments are processed in order. A directory contributes its supported
//! image files, sorted by file name, without descending into subdirectories.
//! A file argument is taken as-is, even with an unsupported extension: the
//! renderer will give it a placeholder cell rather than silently dropping it.
//!
//! ```text
//! photo-catalog catalog --title T --base B  cover.jpg  shoot/  extra.png
//!                                           │          │       │
//!                                           1          2..n    n+1
//! ```

use crate::photo::is_supported_photo;
use crate::types::ImageRef;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Expand `inputs` into an ordered list of photos.
pub fn collect_photos(inputs: &[PathBuf]) -> Result<Vec<ImageRef>, ScanError> {
    let mut photos = Vec::new();
    for input in inputs {
        if input.is_dir() {
            photos.extend(scan_directory(input)?);
        } else if input.is_file() {
            photos.push(ImageRef::from_path(input));
        } else {
            return Err(ScanError::NotFound(input.clone()));
        }
    }
    Ok(photos)
}

fn scan_directory(dir: &Path) -> Result<Vec<ImageRef>, ScanError> {
    let mut photos = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // Skip hidden files such as .DS_Store and editor swap files
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if entry.file_type().is_file() && !hidden && is_supported_photo(path) {
            photos.push(ImageRef::from_path(path));
        }
    }
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    fn filenames(photos: &[ImageRef]) -> Vec<&str> {
        photos.iter().map(|p| p.filename.as_str()).collect()
    }

    #[test]
    fn directory_is_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.jpg", "a.png", "b.JPEG"] {
            touch(&tmp.path().join(name));
        }
        let photos = collect_photos(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(filenames(&photos), vec!["a.png", "b.JPEG", "c.jpg"]);
    }

    #[test]
    fn directory_skips_unsupported_and_hidden_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.jpg", "notes.txt", ".hidden.jpg", "catalog.toml"] {
            touch(&tmp.path().join(name));
        }
        let photos = collect_photos(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(filenames(&photos), vec!["a.jpg"]);
    }

    #[test]
    fn directory_scan_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("top.jpg"));
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested/deep.jpg"));

        let photos = collect_photos(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(filenames(&photos), vec!["top.jpg"]);
    }

    #[test]
    fn files_keep_argument_order() {
        let tmp = TempDir::new().unwrap();
        let z = tmp.path().join("z.jpg");
        let a = tmp.path().join("a.jpg");
        touch(&z);
        touch(&a);

        let photos = collect_photos(&[z.clone(), a.clone()]).unwrap();
        assert_eq!(photos[0].path, z);
        assert_eq!(photos[1].path, a);
    }

    #[test]
    fn explicit_unsupported_file_is_kept() {
        let tmp = TempDir::new().unwrap();
        let odd = tmp.path().join("scan.bmp");
        touch(&odd);
        let photos = collect_photos(&[odd]).unwrap();
        assert_eq!(filenames(&photos), vec!["scan.bmp"]);
    }

    #[test]
    fn files_and_directories_mix_in_order() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("shoot");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("2.jpg"));
        touch(&dir.join("1.jpg"));
        let cover = tmp.path().join("cover.jpg");
        touch(&cover);

        let photos = collect_photos(&[cover, dir]).unwrap();
        assert_eq!(filenames(&photos), vec!["cover.jpg", "1.jpg", "2.jpg"]);
    }

    #[test]
    fn missing_path_is_not_found() {
        let result = collect_photos(&[PathBuf::from("/nonexistent/shoot")]);
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_photos(&[tmp.path().to_path_buf()]).unwrap().is_empty());
    }
}
