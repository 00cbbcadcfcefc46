//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "edit an existing module" or "generate a module".

pub mod generator_service;
pub mod metadata_parser;
pub mod render_service;
pub mod validator;

pub use generator_service::{GenerationReport, ModuleGenerator};
pub use metadata_parser::MetadataParser;
pub use render_service::RenderService;
pub use validator::ModuleValidator;
