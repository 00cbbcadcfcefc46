pub mod block;
pub mod descriptor;
pub mod form;
pub mod module;
pub mod options;
pub mod render_plan;

pub use crate::domain::DomainError;
pub use block::{BlockDefinition, BlockMap};
pub use descriptor::ModuleDescriptor;
pub use form::ModuleForm;
pub use module::ModuleInfo;
pub use options::{ClassLinks, GenerationOptions, ModuleSetting};
pub use render_plan::RenderPlan;
