//! Metadata parser - reads a module descriptor back into generation options.
//!
//! Used in edit mode: the options it returns pre-fill the module form so an
//! existing module can be changed and regenerated. The descriptor may have
//! been edited by hand, so every entry is read on its own and skipped when
//! its required fields are missing.

use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::services::validator::ModuleValidator,
    domain::{
        BlockMap, ClassLinks, ComponentKind, GenerationOptions, IdStripper, ModuleDescriptor,
        ModuleSetting, SettingKind, coerce::value_to_text, settings::display_value,
    },
};

/// Descriptor sections read by the parser.
const EXTEND_KEY: &str = "extend";
const FILES_KEY: &str = "files";
const BLOCKS_KEY: &str = "blocks";
const SETTINGS_KEY: &str = "settings";

pub struct MetadataParser {
    validator: ModuleValidator,
}

impl MetadataParser {
    pub fn new(validator: ModuleValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &ModuleValidator {
        &self.validator
    }

    /// Parse `descriptor` into the generation options of the module
    /// `vendor_prefix` + `module_name`.
    ///
    /// Never fails: sections of the wrong shape read as empty and malformed
    /// entries are dropped.
    #[instrument(skip_all, fields(vendor = vendor_prefix, module = module_name))]
    pub fn parse_metadata(
        &self,
        descriptor: &ModuleDescriptor,
        vendor_prefix: &str,
        module_name: &str,
    ) -> GenerationOptions {
        let stripper = descriptor.id_stripper();
        if descriptor.id().is_none() {
            debug!("Descriptor has no id, class and setting names will be empty");
        }

        let options = GenerationOptions {
            extend_classes: self.parse_extend_classes(descriptor),
            controllers: parse_components(descriptor, &stripper, ComponentKind::Controller),
            models: parse_components(descriptor, &stripper, ComponentKind::Model),
            lists: parse_components(descriptor, &stripper, ComponentKind::List),
            widgets: parse_components(descriptor, &stripper, ComponentKind::Widget),
            blocks: self.parse_blocks(descriptor, vendor_prefix, module_name),
            settings: parse_settings(descriptor, &stripper),
        };

        debug!(
            extend = options.extend_classes.len(),
            controllers = options.controllers.len(),
            models = options.models.len(),
            lists = options.lists.len(),
            widgets = options.widgets.len(),
            blocks = options.blocks.len(),
            settings = options.settings.len(),
            "Descriptor parsed"
        );

        options
    }

    fn parse_extend_classes(&self, descriptor: &ModuleDescriptor) -> ClassLinks {
        let Some(extend) = descriptor.mapping(EXTEND_KEY) else {
            return ClassLinks::new();
        };

        let classes: Vec<&str> = extend.keys().map(String::as_str).collect();
        self.validator.validate_and_link_classes(&classes.join("\n"))
    }

    fn parse_blocks(
        &self,
        descriptor: &ModuleDescriptor,
        vendor_prefix: &str,
        module_name: &str,
    ) -> BlockMap {
        let mut definitions = IndexSet::new();

        for entry in descriptor.sequence(BLOCKS_KEY) {
            let block = field_text(entry, "block");
            let template = field_text(entry, "template");

            match (block, template) {
                (Some(block), Some(template)) => {
                    definitions.insert(format!("{block}@{template}"));
                }
                _ => debug!(?entry, "Skipping block entry without block or template"),
            }
        }

        let definitions: Vec<String> = definitions.into_iter().collect();
        self.validator
            .parse_blocks_data(&definitions.join("\n"), vendor_prefix, module_name)
    }
}

/// Names of the `files` entries whose path belongs to `kind`, with the
/// module id stripped.
fn parse_components(
    descriptor: &ModuleDescriptor,
    stripper: &IdStripper,
    kind: ComponentKind,
) -> Vec<String> {
    let Some(files) = descriptor.mapping(FILES_KEY) else {
        return Vec::new();
    };

    files
        .iter()
        .filter_map(|(class, path)| match path.as_str() {
            Some(path) => Some((class, path)),
            None => {
                debug!(%class, "Skipping file entry without a path");
                None
            }
        })
        .filter(|(_, path)| kind.matches_path(path))
        .map(|(class, _)| stripper.strip(class))
        .collect()
}

fn parse_settings(descriptor: &ModuleDescriptor, stripper: &IdStripper) -> Vec<ModuleSetting> {
    let mut settings = Vec::new();

    for entry in descriptor.sequence(SETTINGS_KEY) {
        let Some(fields) = entry.as_object() else {
            debug!(?entry, "Skipping setting entry that is not a mapping");
            continue;
        };

        let (Some(name), Some(declared), true) = (
            field_text(entry, "name"),
            field_text(entry, "type"),
            fields.contains_key("value"),
        ) else {
            debug!(?entry, "Skipping setting entry without name, type or value");
            continue;
        };

        let kind = SettingKind::resolve_or_default(&declared);
        if kind.as_str() != declared {
            debug!(%name, %declared, "Unknown setting type, reading as str");
        }

        settings.push(ModuleSetting::new(
            stripper.strip(&name),
            kind,
            display_value(kind, fields),
        ));
    }

    settings
}

fn field_text(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(value_to_text)
}
