//! Filesystem error type for asset scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors while reading an asset tree. There is no partial result.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("directory `{0}` not found")]
    NotFound(PathBuf),

    #[error("`{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk directory tree")]
    Walk(#[from] jwalk::Error),
}

impl FilesystemError {
    /// Check that `dir` exists and is a directory.
    pub fn check_dir(dir: &std::path::Path) -> Result<(), Self> {
        if !dir.exists() {
            return Err(Self::NotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(Self::NotADirectory(dir.to_path_buf()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let err = FilesystemError::NotFound(PathBuf::from("dist"));
        assert_eq!(err.to_string(), "directory `dist` not found");

        let err = FilesystemError::Io(
            PathBuf::from("dist/app.js"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("dist/app.js"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_check_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(FilesystemError::check_dir(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            FilesystemError::check_dir(&missing),
            Err(FilesystemError::NotFound(_))
        ));

        let file = dir.path().join("file.js");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            FilesystemError::check_dir(&file),
            Err(FilesystemError::NotADirectory(_))
        ));
    }
}
