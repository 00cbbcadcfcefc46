//! Application layer for modgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ModuleValidator, MetadataParser,
//!   RenderService, ModuleGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the ports. Naming
//! and parsing rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationReport, MetadataParser, ModuleGenerator, ModuleValidator, RenderService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ClassResolver, Filesystem, ShopConfig, TemplateEngine};

pub use error::ApplicationError;
