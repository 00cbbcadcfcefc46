//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModgenError, ModgenResult},
};
use tracing::trace;
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
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> ModgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn create_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn rename_file(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }

    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        self.create_dir_all(to)?;

        for entry in WalkDir::new(from).min_depth(1) {
            let entry = entry.map_err(|e| map_walk_error(from, e))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("not inside {}", from.display()),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else {
                trace!(from = %entry.path().display(), to = %target.display(), "Copying");
                self.copy_file(entry.path(), &target)?;
            }
        }

        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> ModgenError {
    ApplicationError::FilesystemError {
        path: e.path().unwrap_or(root).to_path_buf(),
        reason: format!("Failed to walk directory: {}", e),
    }
    .into()
}
