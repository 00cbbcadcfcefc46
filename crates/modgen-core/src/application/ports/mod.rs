//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations on the shop installation
//!   - `TemplateEngine`: Placeholder rendering of skeleton files
//!   - `ClassResolver`: Lookup of shop classes and their source files
//!   - `ShopConfig`: Where the shop and its modules live
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ClassResolver, Filesystem, ShopConfig, TemplateEngine};

#[cfg(test)]
pub use output::{MockClassResolver, MockFilesystem, MockShopConfig, MockTemplateEngine};
