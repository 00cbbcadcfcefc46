//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::ModgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Queries (`is_file`, `is_dir`) answer `false` on any error.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> ModgenResult<String>;

    /// Write `content` to `path`, replacing any existing file and creating
    /// missing parent directories.
    fn create_file(&self, path: &Path, content: &str) -> ModgenResult<()>;

    fn rename_file(&self, from: &Path, to: &Path) -> ModgenResult<()>;

    fn create_dir_all(&self, path: &Path) -> ModgenResult<()>;

    /// Copy one file, replacing the target.
    fn copy_file(&self, from: &Path, to: &Path) -> ModgenResult<()>;

    /// Recursively copy the contents of `from` into `to`, replacing
    /// existing files.
    fn copy_dir(&self, from: &Path, to: &Path) -> ModgenResult<()>;
}

/// Port for the template engine that fills skeleton files.
///
/// Variables are assigned up front and stay until cleared. `fetch` renders
/// a template file with the current assignments.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateEngine: Send + Sync {
    fn assign(&mut self, name: &str, value: &str);

    fn fetch(&mut self, template: &Path) -> ModgenResult<String>;

    fn clear_assign(&mut self, name: &str);
}

/// Port for resolving shop classes.
///
/// Backed by the shop's class map. Unknown classes answer `false`/`None`.
#[cfg_attr(test, mockall::automock)]
pub trait ClassResolver: Send + Sync {
    fn class_exists(&self, class: &str) -> bool;

    /// Absolute path of the file declaring `class`.
    fn class_file(&self, class: &str) -> Option<PathBuf>;

    fn parent_class(&self, class: &str) -> Option<String>;
}

/// Port for shop installation settings.
#[cfg_attr(test, mockall::automock)]
pub trait ShopConfig: Send + Sync {
    /// Root of the shop sources. Stripped from class file paths.
    fn shop_base_path(&self) -> String;

    /// Directory holding the modules of the vendor being worked on.
    fn vendor_path(&self) -> PathBuf;
}
