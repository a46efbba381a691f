// src/adapters/filesystem.rs
// Real file system adapter implementation

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::{FileSystem, FileSystemError};

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        env::current_dir().map_err(FileSystemError::IoError)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        if path.as_os_str().is_empty() {
            return Err(FileSystemError::InvalidPath(
                "no directory name given".to_string(),
            ));
        }

        fs::create_dir_all(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        path.canonicalize()
            .map_err(|e| FileSystemError::from_io(path, e))
    }
}
