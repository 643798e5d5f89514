//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use stratum_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{StratumError, StratumResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> StratumResult<Vec<DirEntry>> {
        let reader = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry_path.is_dir(),
                path: entry_path,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk_files(&self, path: &Path) -> StratumResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(path).to_path_buf();
                StratumError::from(ApplicationError::FilesystemError {
                    path: at,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Sources in a legacy encoding are decoded lossily; classification only
    /// looks for ASCII markers.
    fn read_to_string(&self, path: &Path) -> StratumResult<String> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StratumError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_children_sorted_with_kinds() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::write(dir.path().join("alpha.txt"), "x").unwrap();

        let entries = LocalFilesystem::new().list_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
        assert_eq!(names, vec![("alpha.txt", false), ("zeta", true)]);
    }

    #[test]
    fn walks_nested_files_only() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Deep.java"), "").unwrap();
        std::fs::write(dir.path().join("Top.java"), "").unwrap();

        let files = LocalFilesystem::new().walk_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn non_utf8_source_is_read_lossily() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Facture.java");
        let mut bytes = b"@Entity\npublic class Facture { // cr".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"ation\n}\n");
        std::fs::write(&file, bytes).unwrap();

        let text = LocalFilesystem::new().read_to_string(&file).unwrap();
        assert!(text.starts_with("@Entity"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn reading_missing_file_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("missing.java"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
