//! Failures while talking to the filesystem, the renderer or the shop.
//! Rejected input is a `DomainError` instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A skeleton file could not be rendered.
    #[error("Template rendering failed for {path}: {reason}")]
    RenderingFailed { path: PathBuf, reason: String },

    /// Module directory already exists and overwriting was not requested.
    #[error("Module already exists at {path}")]
    ModuleExists { path: PathBuf },

    /// Skeleton directory or one of its class templates is missing.
    #[error("Skeleton not found at {path}")]
    SkeletonMissing { path: PathBuf },

    /// The shop class map could not be loaded.
    #[error("Class map error: {reason}")]
    ClassMapError { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ModuleExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to regenerate over it (existing files are overwritten)".into(),
                "Choose a different module name".into(),
            ],
            Self::SkeletonMissing { path } => vec![
                format!("Expected skeleton files at: {}", path.display()),
                "Set templates.skeleton_dir in your config file".into(),
                "Try: modgen config get templates.skeleton_dir".into(),
            ],
            Self::ClassMapError { .. } => vec![
                "Check the class map file referenced by shop.class_map".into(),
                "Each entry needs a file: [classes.\"Name\"] file = \"...\"".into(),
            ],
            Self::RenderingFailed { path, .. } => vec![
                format!("Check that {} is readable UTF-8 text", path.display()),
                "Placeholders are written as [{$name}]".into(),
            ],
            Self::StoreLockError => vec!["Run the command again".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ModuleExists { .. } => ErrorCategory::Validation,
            Self::SkeletonMissing { .. } => ErrorCategory::NotFound,
            Self::ClassMapError { .. } => ErrorCategory::Configuration,
        }
    }
}
