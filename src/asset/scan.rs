//! Asset classification (reads the filesystem, no other side effects).

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::{AssetCategory, FilesystemError};
use crate::debug;

/// One classified file of a build-output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    relative_path: PathBuf,
    size_bytes: u64,
    category: AssetCategory,
}

impl AssetRecord {
    pub fn new(relative_path: impl Into<PathBuf>, size_bytes: u64, category: AssetCategory) -> Self {
        Self {
            relative_path: relative_path.into(),
            size_bytes,
            category,
        }
    }

    /// Path relative to the scanned root.
    #[inline]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[inline]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[inline]
    pub const fn category(&self) -> AssetCategory {
        self.category
    }

    /// Whether the file exceeds its category budget.
    #[inline]
    pub const fn is_oversized(&self) -> bool {
        self.category.is_oversized(self.size_bytes)
    }
}

/// Classify every regular file under `root`
///
/// ```text
/// dist/
/// ├── index.html              -> (unrecognized, dropped)
/// ├── js/app.3f2a.js          -> script
/// ├── css/app.91c0.css        -> stylesheet
/// ├── img/logo.png            -> image
/// └── fonts/mdi.woff2         -> font
/// ```
///
/// The walk is serial and sorted by name, so the output order is stable.
/// Symlinks are followed, into directories too. Any I/O error aborts the
/// scan, including a dangling link or a link cycle.
pub fn classify(root: &Path) -> Result<Vec<AssetRecord>, FilesystemError> {
    FilesystemError::check_dir(root)?;

    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(true)
        .parallelism(Parallelism::Serial);

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let metadata =
            std::fs::metadata(&path).map_err(|err| FilesystemError::Io(path.clone(), err))?;
        if !metadata.is_file() {
            continue;
        }

        let Some(category) = AssetCategory::from_path(&path) else {
            debug!("analyze"; "skipping {}", path.display());
            continue;
        };

        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        records.push(AssetRecord::new(relative, metadata.len(), category));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::size::KIB;
    use std::fs;
    use tempfile::TempDir;

    fn write_sized(path: &Path, size: u64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; size as usize]).unwrap();
    }

    #[test]
    fn test_classify_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = classify(&dir.path().join("dist"));
        assert!(matches!(result, Err(FilesystemError::NotFound(_))));
    }

    #[test]
    fn test_classify_root_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("dist");
        fs::write(&file, "not a dir").unwrap();
        assert!(matches!(
            classify(&file),
            Err(FilesystemError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_classify_empty() {
        let dir = TempDir::new().unwrap();
        assert!(classify(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_classify_only_unrecognized() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        assert!(classify(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_classify_nested() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_sized(&root.join("index.html"), 10);
        write_sized(&root.join("favicon.ico"), 10);
        write_sized(&root.join("js/app.js"), 600 * KIB);
        write_sized(&root.join("js/app.js.map"), 10);
        write_sized(&root.join("css/app.css"), 50 * KIB);
        write_sized(&root.join("img/icons/logo.PNG"), 3);
        write_sized(&root.join("fonts/mdi.woff2"), 7);

        let records = classify(root).unwrap();
        assert_eq!(records.len(), 4);

        let find = |rel: &str| {
            records
                .iter()
                .find(|r| r.relative_path() == Path::new(rel))
                .unwrap_or_else(|| panic!("missing {rel}"))
        };
        assert_eq!(find("js/app.js").category(), AssetCategory::Script);
        assert_eq!(find("js/app.js").size_bytes(), 600 * KIB);
        assert!(find("js/app.js").is_oversized());
        assert_eq!(find("css/app.css").category(), AssetCategory::Stylesheet);
        assert!(!find("css/app.css").is_oversized());
        assert_eq!(find("img/icons/logo.PNG").category(), AssetCategory::Image);
        assert_eq!(find("fonts/mdi.woff2").category(), AssetCategory::Font);
    }

    #[test]
    fn test_classify_visits_hidden_files() {
        let dir = TempDir::new().unwrap();
        write_sized(&dir.path().join(".cache/chunk.js"), 1);
        write_sized(&dir.path().join(".hidden.css"), 1);

        let records = classify(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_classify_count_matches_recognized_files() {
        let dir = TempDir::new().unwrap();
        let names = [
            "a.js", "b.JS", "c.css", "d.gif", "e.svg", "f.jpeg", "g.otf", "h.eot", "i.json",
            "j.html", "k",
        ];
        for (i, name) in names.iter().enumerate() {
            write_sized(&dir.path().join(format!("d{}", i % 3)).join(name), i as u64);
        }

        let expected = names
            .iter()
            .filter(|n| AssetCategory::from_path(Path::new(n)).is_some())
            .count();
        assert_eq!(expected, 8);
        assert_eq!(classify(dir.path()).unwrap().len(), expected);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for name in ["z.js", "a.js", "m/b.css", "c.png"] {
            write_sized(&dir.path().join(name), 1);
        }
        assert_eq!(classify(dir.path()).unwrap(), classify(dir.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_dangling_symlink_errors() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.js"), dir.path().join("link.js")).unwrap();
        assert!(matches!(
            classify(dir.path()),
            Err(FilesystemError::Io(_, _) | FilesystemError::Walk(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_follows_symlinked_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("dist");
        let shared = dir.path().join("shared");
        write_sized(&root.join("app.js"), 1);
        write_sized(&shared.join("chunk.js"), 2);
        std::os::unix::fs::symlink(&shared, root.join("linked")).unwrap();

        let records = classify(&root).unwrap();
        let paths: Vec<_> = records.iter().map(|r| r.relative_path().to_path_buf()).collect();
        assert_eq!(paths, [PathBuf::from("app.js"), PathBuf::from("linked/chunk.js")]);
        assert_eq!(records[1].size_bytes(), 2);
    }
}
