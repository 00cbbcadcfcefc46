//! Core of the modgen module skeleton generator.
//!
//! * [`domain`] holds the naming rules, the parsing of raw form input and the
//!   two documents that travel between runs: [`domain::GenerationOptions`]
//!   and the module descriptor (`metadata.json`).
//! * [`application`] holds the use cases. [`application::ModuleValidator`]
//!   checks names and form rows against the shop, [`application::MetadataParser`]
//!   turns a descriptor back into options, and [`application::ModuleGenerator`]
//!   copies and renders the skeleton.
//! * The use cases reach the filesystem, the template engine and the shop
//!   only through the traits in [`application::ports`]; `modgen-adapters`
//!   implements them.
//!
//! ```rust,no_run
//! # use modgen_core::prelude::*;
//! # fn run(
//! #     json: &str,
//! #     fs: Box<dyn Filesystem>,
//! #     classes: Box<dyn ClassResolver>,
//! #     shop: Box<dyn ShopConfig>,
//! # ) -> ModgenResult<()> {
//! let descriptor = ModuleDescriptor::from_json(json)?;
//! let parser = MetadataParser::new(ModuleValidator::new(fs, classes, shop));
//! let options = parser.parse_metadata(&descriptor, "ab", "MyModule");
//! println!("{}", options.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types a front end needs to wire and drive the use cases.
pub mod prelude {
    pub use crate::application::{
        MetadataParser, ModuleGenerator, ModuleValidator, RenderService,
        ports::{ClassResolver, Filesystem, ShopConfig, TemplateEngine},
    };
    pub use crate::domain::{
        BlockDefinition, BlockMap, ClassLinks, GenerationOptions, ModuleDescriptor, ModuleForm,
        ModuleInfo, ModuleSetting, RenderPlan, SettingKind,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}
