//! Enumerating the resource subdirectories of a source root.

use std::path::{Path, PathBuf};

use crate::linker::LinkError;

/// The Python host drops byte-code caches into the outputs tree; never link
/// them into the game folder.
pub const CACHE_DIR_NAME: &str = "__pycache__";

/// Immediate subdirectories of `base_dir`, sorted by path. Plain files and
/// [`CACHE_DIR_NAME`] are ignored.
pub fn source_directories(base_dir: &Path) -> Result<Vec<PathBuf>, LinkError> {
    let entries = std::fs::read_dir(base_dir).map_err(|e| LinkError::SourceUnreadable {
        path: base_dir.to_path_buf(),
        source: e,
    })?;

    let mut directories = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LinkError::SourceUnreadable {
            path: base_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() && entry.file_name() != CACHE_DIR_NAME {
            directories.push(path);
        }
    }
    directories.sort();
    Ok(directories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_subdirectories_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("logos")).unwrap();
        fs::create_dir(dir.path().join("faces")).unwrap();
        fs::create_dir(dir.path().join("kits")).unwrap();

        let dirs = source_directories(dir.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["faces", "kits", "logos"]);
    }

    #[test]
    fn skips_files_and_the_cache_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("faces")).unwrap();
        fs::create_dir(dir.path().join(CACHE_DIR_NAME)).unwrap();
        fs::write(dir.path().join("README.md"), b"# outputs").unwrap();

        let dirs = source_directories(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().join("faces")]);
    }

    #[test]
    fn missing_root_is_not_accessible() {
        let dir = tempdir().unwrap();
        let err = source_directories(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, LinkError::SourceUnreadable { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn empty_root_yields_no_directories() {
        let dir = tempdir().unwrap();
        assert!(source_directories(dir.path()).unwrap().is_empty());
    }
}
