// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modgen.
//!
//! Pure rules and data: naming validation, multi-line input parsing, the
//! module descriptor and the generation options it round-trips with.
//! Filesystem access, templating and class lookup go through ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total parsing**: Malformed input is filtered, never fatal
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod coerce;
pub mod entities;
pub mod error;
pub mod input;
pub mod settings;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    block::{BlockDefinition, BlockMap},
    descriptor::{IdStripper, ModuleDescriptor},
    form::{ModuleForm, SettingRow},
    module::ModuleInfo,
    options::{ClassLinks, GenerationOptions, ModuleSetting},
    render_plan::{ClassData, ClassFile, FileToProcess, RenderPlan},
};

pub use error::DomainError;

pub use value_objects::{ComponentKind, LineRule, SettingKind};

pub use coerce::{ValueType, get_array_value};
pub use input::{parse_blocks_data, parse_multi_line_input};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity Tests
    // ========================================================================

    #[test]
    fn blocks_parsed_from_text_survive_a_descriptor_build() {
        let module = ModuleInfo::new("ab", "Mod").unwrap();
        let mut options = GenerationOptions::default();
        options.blocks = parse_blocks_data("header@layout/base.tpl", "ab", "Mod");

        let descriptor = ModuleDescriptor::build(&module, &options);
        let blocks = descriptor.sequence("blocks");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["block"], "header");
        assert_eq!(blocks[0]["file"], "Application/views/blocks/abMod_header.tpl");
    }

    #[test]
    fn form_lines_become_components() {
        let form = ModuleForm::from_toml("models = \"Item\\nbad_name\\nItem\"").unwrap();
        assert_eq!(parse_multi_line_input(&form.models, LineRule::CamelCase), vec!["Item"]);
    }

    #[test]
    fn module_title_is_human_readable_name() {
        let module = ModuleInfo::new("oxps", "SEOTools2").unwrap();
        assert_eq!(module.title(), DomainValidator::camel_case_to_human_readable("SEOTools2"));
    }

    #[test]
    fn rejected_names_come_with_suggestions() {
        let err = ModuleInfo::new("x", "Mod").unwrap_err();
        assert!(matches!(err, DomainError::InvalidVendorPrefix { .. }));
        assert!(err.suggestions().iter().any(|s| s.contains("lowercase")));
    }
}
