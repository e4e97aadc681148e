//! Raster formats handled by the optimizer.

use std::path::{Path, PathBuf};

use crate::asset::FilesystemError;

/// Raster format with a compressor backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    /// Processing order.
    pub const ALL: [Self; 2] = [Self::Png, Self::Jpeg];

    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

/// List regular files directly inside `dir` (no recursion), sorted by name,
/// keeping those whose format passes `keep`.
pub fn list_images(
    dir: &Path,
    keep: impl Fn(RasterFormat) -> bool,
) -> Result<Vec<PathBuf>, FilesystemError> {
    FilesystemError::check_dir(dir)?;

    let entries =
        std::fs::read_dir(dir).map_err(|err| FilesystemError::Io(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| FilesystemError::Io(dir.to_path_buf(), err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if RasterFormat::from_path(&path).is_some_and(&keep) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_path() {
        assert_eq!(RasterFormat::from_path(Path::new("a.png")), Some(RasterFormat::Png));
        assert_eq!(RasterFormat::from_path(Path::new("a.JPG")), Some(RasterFormat::Jpeg));
        assert_eq!(RasterFormat::from_path(Path::new("a.jpeg")), Some(RasterFormat::Jpeg));
        assert_eq!(RasterFormat::from_path(Path::new("a.gif")), None);
        assert_eq!(RasterFormat::from_path(Path::new("png")), None);
    }

    #[test]
    fn test_list_images_flat_and_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.png"), "x").unwrap();
        fs::write(dir.path().join("a.jpg"), "x").unwrap();
        fs::write(dir.path().join("c.svg"), "x").unwrap();
        fs::create_dir(dir.path().join("optimized")).unwrap();
        fs::write(dir.path().join("optimized/b.png"), "x").unwrap();

        let all = list_images(dir.path(), |_| true).unwrap();
        let names: Vec<_> = all
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png"]);

        let png = list_images(dir.path(), |f| f == RasterFormat::Png).unwrap();
        assert_eq!(png.len(), 1);
    }

    #[test]
    fn test_list_images_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            list_images(&dir.path().join("assets"), |_| true),
            Err(FilesystemError::NotFound(_))
        ));
    }
}
