//! Blob store: raw file bytes on the local filesystem.
//!
//! Blobs live flat under the store's root directory, named
//! `{uuid-v4}.{ext}` so the on-disk name is opaque and collision-free
//! regardless of what the client called the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{Result, ShelfError};

/// Physical storage for uploaded file content.
#[derive(Debug, Clone)]
pub struct BlobStore {
    /// Root directory for blobs.
    base_path: PathBuf,
}

impl BlobStore {
    /// Create a new BlobStore rooted at the given path.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write content under a freshly generated stored name.
    ///
    /// `ext` must already be validated and lowercased; the returned name
    /// is `{uuid}.{ext}`. The write is all-or-nothing from the caller's
    /// point of view: on error no usable blob exists under the name.
    pub fn put(&self, content: &[u8], ext: &str) -> Result<String> {
        let stored_name = Self::generate_stored_name(ext);
        let path = self.path(&stored_name);

        if let Err(e) = fs::write(&path, content) {
            // A failed write may leave a truncated file; remove it so no
            // partial blob survives the error.
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }

        Ok(stored_name)
    }

    /// Read a blob's content.
    pub fn get(&self, stored_name: &str) -> Result<Vec<u8>> {
        match fs::read(self.path(stored_name)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ShelfError::NotFound(format!("blob {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a blob.
    ///
    /// Deletion converges: an already-absent blob counts as success.
    /// Returns `true` if a file was actually removed.
    pub fn delete(&self, stored_name: &str) -> Result<bool> {
        match fs::remove_file(self.path(stored_name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a blob exists.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.path(stored_name).exists()
    }

    /// Number of blobs currently in the store.
    pub fn len(&self) -> Result<usize> {
        Ok(fs::read_dir(&self.base_path)?.count())
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Full path of a stored name.
    fn path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Generate a new stored name with the given extension.
    fn generate_stored_name(ext: &str) -> String {
        format!("{}.{ext}", Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, BlobStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BlobStore::new(temp_dir.path()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("blobs");

        assert!(!root.exists());

        let store = BlobStore::new(&root).unwrap();

        assert!(root.exists());
        assert_eq!(store.base_path(), root);
    }

    #[test]
    fn test_put_and_get() {
        let (_temp_dir, store) = setup_store();
        let content = b"Hello, World!";

        let stored_name = store.put(content, "txt").unwrap();

        assert!(stored_name.ends_with(".txt"));
        assert_eq!(store.get(&stored_name).unwrap(), content);
    }

    #[test]
    fn test_put_generates_unique_names() {
        let (_temp_dir, store) = setup_store();

        let a = store.put(b"same", "txt").unwrap();
        let b = store.put(b"same", "txt").unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_get_not_found() {
        let (_temp_dir, store) = setup_store();

        let result = store.get("nonexistent.txt");

        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = setup_store();

        let stored_name = store.put(b"to delete", "txt").unwrap();
        assert!(store.exists(&stored_name));

        assert!(store.delete(&stored_name).unwrap());
        assert!(!store.exists(&stored_name));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, store) = setup_store();

        let stored_name = store.put(b"data", "txt").unwrap();
        assert!(store.delete(&stored_name).unwrap());

        // Second delete reports nothing removed but does not fail
        assert!(!store.delete(&stored_name).unwrap());
        assert!(!store.delete("never-existed.txt").unwrap());
    }

    #[test]
    fn test_binary_content() {
        let (_temp_dir, store) = setup_store();
        let content: Vec<u8> = (0..=255).collect();

        let stored_name = store.put(&content, "png").unwrap();

        assert_eq!(store.get(&stored_name).unwrap(), content);
    }

    #[test]
    fn test_len_and_is_empty() {
        let (_temp_dir, store) = setup_store();

        assert!(store.is_empty().unwrap());

        let name = store.put(b"x", "txt").unwrap();
        assert_eq!(store.len().unwrap(), 1);

        store.delete(&name).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_large_blob() {
        let (_temp_dir, store) = setup_store();
        let content: Vec<u8> = vec![0xAB; 1024 * 1024];

        let stored_name = store.put(&content, "png").unwrap();

        assert_eq!(store.get(&stored_name).unwrap(), content);
    }
}
