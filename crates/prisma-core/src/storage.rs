//! The narrow filesystem capability the configuration subsystem depends on.

use std::path::Path;

/// Storage operations needed to provision and read configuration documents.
///
/// Implementations must be shareable across threads: the three documents of
/// a workspace are read concurrently.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> std::io::Result<String>;

    fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()>;

    fn create_dir(&self, path: &Path, recursive: bool) -> std::io::Result<()>;
}

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> std::io::Result<String> {
        crate::io::read_utf8(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()> {
        crate::io::atomic_write(path, content.as_bytes())
    }

    fn create_dir(&self, path: &Path, recursive: bool) -> std::io::Result<()> {
        if recursive {
            std::fs::create_dir_all(path)
        } else {
            std::fs::create_dir(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_storage_roundtrip() {
        let dir = TempDir::new().unwrap();
        let storage = FsStorage;
        let nested = dir.path().join("a/b");
        assert!(!storage.exists(&nested));
        storage.create_dir(&nested, true).unwrap();
        assert!(storage.exists(&nested));

        let file = nested.join("doc.yaml");
        storage.write_text(&file, "key: value\n").unwrap();
        assert_eq!(storage.read_text(&file).unwrap(), "key: value\n");
    }

    #[test]
    fn non_recursive_create_requires_parent() {
        let dir = TempDir::new().unwrap();
        let err = FsStorage
            .create_dir(&dir.path().join("missing/child"), false)
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
