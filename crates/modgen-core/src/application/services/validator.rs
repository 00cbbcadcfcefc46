//! Module validator - input rules that need the shop.
//!
//! Pure naming and parsing rules are delegated to the domain; this service
//! adds the checks that consult the class resolver, the filesystem and the
//! shop configuration.

use std::path::{MAIN_SEPARATOR_STR, PathBuf};

use indexmap::IndexSet;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

use crate::{
    application::ports::{ClassResolver, Filesystem, ShopConfig},
    domain::{
        BlockDefinition, BlockMap, ClassLinks, DomainValidator, GenerationOptions, LineRule, ModuleForm,
        ModuleInfo, ModuleSetting, SettingKind, ValueType, get_array_value,
        input::{parse_blocks_data, parse_multi_line_input},
        value_objects::ComponentKind,
    },
};

/// Folder holding legacy class aliases. Classes resolved there are looked up
/// through their parent class instead.
pub const BACKWARD_COMPATIBILITY_FOLDER: &str = "BackwardCompatibility";

/// Validation service for module generation input.
pub struct ModuleValidator {
    filesystem: Box<dyn Filesystem>,
    classes: Box<dyn ClassResolver>,
    shop: Box<dyn ShopConfig>,
}

impl ModuleValidator {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        classes: Box<dyn ClassResolver>,
        shop: Box<dyn ShopConfig>,
    ) -> Self {
        Self {
            filesystem,
            classes,
            shop,
        }
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    // -------------------------------------------------------------------------
    // Naming rules
    // -------------------------------------------------------------------------

    pub fn validate_vendor_prefix(&self, prefix: &str) -> bool {
        DomainValidator::validate_vendor_prefix(prefix)
    }

    pub fn validate_camel_case_name(&self, name: &str) -> bool {
        DomainValidator::validate_camel_case_name(name)
    }

    pub fn validate_settings_type(&self, kind: &str) -> bool {
        DomainValidator::validate_settings_type(kind)
    }

    pub fn camel_case_to_human_readable(&self, input: &str) -> String {
        DomainValidator::camel_case_to_human_readable(input)
    }

    // -------------------------------------------------------------------------
    // Input parsing
    // -------------------------------------------------------------------------

    pub fn get_array_value(
        &self,
        map: &Map<String, Value>,
        key: &str,
        kind: ValueType,
    ) -> Option<Value> {
        get_array_value(map, key, kind)
    }

    pub fn parse_multi_line_input(&self, input: &str, rule: LineRule) -> Vec<String> {
        parse_multi_line_input(input, rule)
    }

    pub fn parse_blocks_data(&self, input: &str, vendor_prefix: &str, module_name: &str) -> BlockMap {
        parse_blocks_data(input, vendor_prefix, module_name)
    }

    /// Link each listed class to the shop-relative directory of its source
    /// file.
    ///
    /// Classes the resolver does not know, or whose file is missing, are
    /// dropped.
    #[instrument(skip_all)]
    pub fn validate_and_link_classes(&self, input: &str) -> ClassLinks {
        let base_path = self.shop.shop_base_path();
        let mut links = ClassLinks::new();

        for class in parse_multi_line_input(input, LineRule::NotEmpty) {
            if !self.classes.class_exists(&class) {
                debug!(%class, "Skipping unknown class");
                continue;
            }

            let Some(path) = self.class_path(&class) else {
                debug!(%class, "Skipping class without a source file");
                continue;
            };

            if !self.filesystem.is_file(&path) {
                debug!(%class, path = %path.display(), "Skipping class, file not found");
                continue;
            }

            let dir = path
                .parent()
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_default();
            let dir = if base_path.is_empty() {
                dir
            } else {
                dir.replace(&base_path, "")
            };

            trace!(%class, %dir, "Linked class");
            links.insert(class, format!("{dir}{MAIN_SEPARATOR_STR}"));
        }

        links
    }

    /// Source file of `class`. A file in the backward compatibility folder is
    /// an alias, so the parent class's file is used instead.
    pub fn class_path(&self, class: &str) -> Option<PathBuf> {
        let path = self.classes.class_file(class)?;

        if !path
            .to_string_lossy()
            .contains(BACKWARD_COMPATIBILITY_FOLDER)
        {
            return Some(path);
        }

        let parent = self.classes.parent_class(class)?;
        trace!(%class, %parent, "Resolving aliased class through its parent");
        self.classes.class_file(&parent)
    }

    // -------------------------------------------------------------------------
    // Shop state
    // -------------------------------------------------------------------------

    pub fn module_dir(&self, module_name: &str) -> PathBuf {
        self.shop.vendor_path().join(module_name)
    }

    pub fn module_exists(&self, module_name: &str) -> bool {
        !module_name.is_empty() && self.filesystem.is_dir(&self.module_dir(module_name))
    }

    // -------------------------------------------------------------------------
    // Form collection
    // -------------------------------------------------------------------------

    /// Build generation options from a filled-in module form.
    #[instrument(skip_all, fields(module = %module))]
    pub fn collect_options(&self, module: &ModuleInfo, form: &ModuleForm) -> GenerationOptions {
        let mut options = GenerationOptions {
            extend_classes: self.validate_and_link_classes(&form.extend),
            blocks: parse_blocks_data(&form.blocks, module.vendor_prefix(), module.name()),
            ..GenerationOptions::default()
        };

        for (kind, input) in [
            (ComponentKind::Controller, &form.controllers),
            (ComponentKind::Model, &form.models),
            (ComponentKind::List, &form.lists),
            (ComponentKind::Widget, &form.widgets),
        ] {
            *options.components_mut(kind) = parse_multi_line_input(input, LineRule::CamelCase);
        }

        let mut seen = IndexSet::new();
        for row in &form.settings {
            let name = row.name.trim();
            let kind = row.kind.trim();

            if accept_setting(&mut seen, name, kind) {
                options.settings.push(ModuleSetting::new(
                    name,
                    SettingKind::resolve_or_default(kind),
                    row.value.clone(),
                ));
            }
        }

        options
    }

    /// Apply the form rules to options that were not built from a form,
    /// such as a JSON options document.
    ///
    /// Extended classes are linked again through the resolver and component
    /// names must be camel case. Blocks are rebuilt from their
    /// `block@template` lines for this module, and settings follow the form's
    /// row rules. Options from [`Self::collect_options`] come back unchanged.
    #[instrument(skip_all, fields(module = %module))]
    pub fn normalize_options(
        &self,
        module: &ModuleInfo,
        options: &GenerationOptions,
    ) -> GenerationOptions {
        let extend = join_lines(options.extend_classes.keys().cloned());
        let blocks = join_lines(options.blocks.values().map(BlockDefinition::definition_line));

        let mut normalized = GenerationOptions {
            extend_classes: self.validate_and_link_classes(&extend),
            blocks: parse_blocks_data(&blocks, module.vendor_prefix(), module.name()),
            ..GenerationOptions::default()
        };

        for kind in ComponentKind::ALL {
            let names = join_lines(options.components(kind).iter().cloned());
            *normalized.components_mut(kind) = parse_multi_line_input(&names, LineRule::CamelCase);
        }

        let mut seen = IndexSet::new();
        normalized.settings = options
            .settings
            .iter()
            .filter(|setting| accept_setting(&mut seen, &setting.name, setting.kind.as_str()))
            .cloned()
            .collect();

        if normalized != *options {
            debug!("Dropped or relinked option entries");
        }
        normalized
    }
}

/// A setting row needs a camel case name and a known type. The first row
/// with a given name wins.
fn accept_setting(seen: &mut IndexSet<String>, name: &str, kind: &str) -> bool {
    if !DomainValidator::validate_camel_case_name(name)
        || !DomainValidator::validate_settings_type(kind)
    {
        debug!(name, kind, "Skipping invalid setting row");
        return false;
    }
    if !seen.insert(name.to_string()) {
        debug!(name, "Skipping duplicate setting row");
        return false;
    }
    true
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

impl std::fmt::Debug for ModuleValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleValidator")
            .field("vendor_path", &self.shop.vendor_path())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockClassResolver, MockFilesystem, MockShopConfig};
    use crate::domain::entities::form::SettingRow;
    use mockall::predicate::eq;

    fn shop() -> MockShopConfig {
        let mut shop = MockShopConfig::new();
        shop.expect_shop_base_path()
            .return_const("/shop/source/".to_string());
        shop.expect_vendor_path()
            .return_const(PathBuf::from("/shop/source/modules/ab"));
        shop
    }

    fn validator(fs: MockFilesystem, classes: MockClassResolver) -> ModuleValidator {
        ModuleValidator::new(Box::new(fs), Box::new(classes), Box::new(shop()))
    }

    #[test]
    fn links_known_classes_to_their_directory() {
        let mut classes = MockClassResolver::new();
        classes
            .expect_class_exists()
            .returning(|class| class == "Article");
        classes
            .expect_class_file()
            .with(eq("Article"))
            .return_const(Some(PathBuf::from(
                "/shop/source/Application/Model/Article.php",
            )));

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(true);

        let links = validator(fs, classes).validate_and_link_classes("Article\nMissing\n\nArticle");

        assert_eq!(links.len(), 1);
        assert_eq!(links["Article"], "Application/Model/");
    }

    #[test]
    fn drops_classes_whose_file_is_missing() {
        let mut classes = MockClassResolver::new();
        classes.expect_class_exists().return_const(true);
        classes
            .expect_class_file()
            .return_const(Some(PathBuf::from("/shop/source/Core/Gone.php")));

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);

        assert!(validator(fs, classes).validate_and_link_classes("Gone").is_empty());
    }

    #[test]
    fn backward_compatible_alias_resolves_through_parent() {
        let mut classes = MockClassResolver::new();
        classes.expect_class_exists().return_const(true);
        classes
            .expect_class_file()
            .with(eq("oxarticle"))
            .return_const(Some(PathBuf::from(
                "/shop/source/Core/BackwardCompatibility/oxarticle.php",
            )));
        classes
            .expect_parent_class()
            .with(eq("oxarticle"))
            .return_const(Some("Article".to_string()));
        classes
            .expect_class_file()
            .with(eq("Article"))
            .return_const(Some(PathBuf::from(
                "/shop/source/Application/Model/Article.php",
            )));

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(true);

        let links = validator(fs, classes).validate_and_link_classes("oxarticle");
        assert_eq!(links["oxarticle"], "Application/Model/");
    }

    #[test]
    fn module_exists_requires_a_name_and_a_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(PathBuf::from("/shop/source/modules/ab/Mod")))
            .return_const(true);
        fs.expect_is_dir().return_const(false);

        let validator = validator(fs, MockClassResolver::new());

        assert!(validator.module_exists("Mod"));
        assert!(!validator.module_exists("Other"));
        assert!(!validator.module_exists(""));
    }

    #[test]
    fn collects_options_from_form() {
        let mut classes = MockClassResolver::new();
        classes.expect_class_exists().return_const(false);

        let form = ModuleForm {
            extend: "Unknown".into(),
            controllers: "Page\nbad".into(),
            lists: "Item".into(),
            blocks: "header@layout/base.tpl".into(),
            settings: vec![
                SettingRow {
                    name: "Flag".into(),
                    kind: "bool".into(),
                    value: "1".into(),
                },
                SettingRow {
                    name: "Flag".into(),
                    kind: "str".into(),
                    value: "again".into(),
                },
                SettingRow {
                    name: "lower".into(),
                    kind: "str".into(),
                    value: String::new(),
                },
                SettingRow {
                    name: "Color".into(),
                    kind: "rgb".into(),
                    value: String::new(),
                },
            ],
            ..ModuleForm::default()
        };

        let module = ModuleInfo::new("ab", "Mod").unwrap();
        let options = validator(MockFilesystem::new(), classes).collect_options(&module, &form);

        assert!(options.extend_classes.is_empty());
        assert_eq!(options.controllers, vec!["Page"]);
        assert_eq!(options.lists, vec!["Item"]);
        assert_eq!(options.blocks["_header"].file, "Application/views/blocks/abMod_header.tpl");
        assert_eq!(
            options.settings,
            vec![ModuleSetting::new("Flag", SettingKind::Bool, "1")]
        );
    }

    #[test]
    fn normalizing_drops_path_segments_and_unknown_classes() {
        let mut classes = MockClassResolver::new();
        classes
            .expect_class_exists()
            .returning(|class| class == "Article");
        classes
            .expect_class_file()
            .with(eq("Article"))
            .return_const(Some(PathBuf::from(
                "/shop/source/Application/Model/Article.php",
            )));

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(true);

        let options = GenerationOptions::from_json(
            r#"{
                "aExtendClasses": {"Nope\\Unknown": "../../../../", "Article": "../../elsewhere/"},
                "aNewControllers": ["/../../../../escaped", "Page", "Page"],
                "aNewModels": ["../Order"],
                "aNewWidgets": ["Teaser"],
                "aNewBlocks": {"_any": {"block": "header", "template": "layout/base.tpl", "file": "../../x.tpl"}},
                "aModuleSettings": [
                    {"name": "Limit", "type": "num", "value": "10"},
                    {"name": "../Limit", "type": "str", "value": ""},
                    {"name": "Limit", "type": "str", "value": "again"}
                ]
            }"#,
        )
        .unwrap();

        let module = ModuleInfo::new("ab", "Mod").unwrap();
        let normalized = validator(fs, classes).normalize_options(&module, &options);

        assert_eq!(normalized.extend_classes.len(), 1);
        assert_eq!(normalized.extend_classes["Article"], "Application/Model/");
        assert_eq!(normalized.controllers, vec!["Page"]);
        assert!(normalized.models.is_empty());
        assert_eq!(normalized.widgets, vec!["Teaser"]);
        assert_eq!(
            normalized.blocks["_header"].file,
            "Application/views/blocks/abMod_header.tpl"
        );
        assert_eq!(
            normalized.settings,
            vec![ModuleSetting::new("Limit", SettingKind::Num, "10")]
        );
    }

    #[test]
    fn normalizing_collected_options_changes_nothing() {
        let mut classes = MockClassResolver::new();
        classes.expect_class_exists().return_const(false);

        let form = ModuleForm {
            controllers: "Page".into(),
            lists: "ItemList".into(),
            blocks: "header@layout/base.tpl".into(),
            settings: vec![SettingRow {
                name: "Flag".into(),
                kind: "bool".into(),
                value: "1".into(),
            }],
            ..ModuleForm::default()
        };

        let module = ModuleInfo::new("ab", "Mod").unwrap();
        let validator = validator(MockFilesystem::new(), classes);
        let options = validator.collect_options(&module, &form);

        assert_eq!(validator.normalize_options(&module, &options), options);
    }
}
