// src/ports/filesystem.rs
// File system port (interface)

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file system operations
#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl FileSystemError {
    /// Classify an IO error for the given path
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound(path.to_string_lossy().into_owned()),
            io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(path.to_string_lossy().into_owned())
            }
            _ => Self::IoError(error),
        }
    }
}

/// Port for the file system operations the options parser needs
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// The process working directory
    fn current_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Create a directory and all of its missing parents
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Get the canonical, absolute path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FileSystemError>;
}

// Implement FileSystem for references to implement FileSystem
impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        (*self).current_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        (*self).create_dir_all(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        (*self).canonicalize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classification() {
        let path = Path::new("/some/dir");

        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::NotFound)),
            FileSystemError::PathNotFound(p) if p == "/some/dir"
        ));
        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)),
            FileSystemError::PermissionDenied(_)
        ));
        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::AlreadyExists)),
            FileSystemError::IoError(_)
        ));
    }
}
