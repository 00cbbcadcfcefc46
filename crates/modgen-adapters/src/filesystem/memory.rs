//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ModgenResult,
};

/// In-memory filesystem. Clones share the same contents.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn add_file(&mut self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        self.files.insert(path.to_path_buf(), content.to_string());
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file, creating its parent directories (test setup helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_file(path.as_ref(), content);
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    fn read(&self) -> ModgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> ModgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> ModgenResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn create_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        self.write()?.add_file(path, content);
        Ok(())
    }

    fn rename_file(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        let mut inner = self.write()?;
        let content = inner
            .files
            .remove(from)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "File does not exist".into(),
            })?;
        inner.add_file(to, &content);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        self.write()?.add_dir_all(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        let content = self.read_to_string(from)?;
        self.create_file(to, &content)
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        let mut inner = self.write()?;

        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(path, content)| {
                let relative = path.strip_prefix(from).ok()?;
                Some((to.join(relative), content.clone()))
            })
            .collect();
        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|dir| dir.strip_prefix(from).ok().map(|relative| to.join(relative)))
            .collect();

        inner.add_dir_all(to);
        for dir in directories {
            inner.add_dir_all(&dir);
        }
        for (path, content) in files {
            inner.add_file(&path, &content);
        }

        Ok(())
    }
}
