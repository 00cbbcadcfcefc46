//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod class_map;
pub mod filesystem;
pub mod renderer;
pub mod shop_config;

// Re-export commonly used adapters
pub use class_map::ClassMapResolver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderEngine;
pub use shop_config::StaticShopConfig;
