//! Integration tests for modgen-core.
//!
//! Exercise the public API end to end with small in-file fakes for the
//! ports.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use modgen_core::{
    application::{MetadataParser, ModuleValidator, ports::*},
    domain::{
        BlockDefinition, DomainValidator, LineRule, ModuleSetting, SettingKind,
        parse_blocks_data, parse_multi_line_input,
    },
    error::{ModgenError, ModgenResult},
    prelude::*,
};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct FakeFs {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl Filesystem for FakeFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> ModgenResult<String> {
        Err(ModgenError::Internal {
            message: format!("not readable: {}", path.display()),
        })
    }

    fn create_file(&self, _path: &Path, _content: &str) -> ModgenResult<()> {
        Ok(())
    }

    fn rename_file(&self, _from: &Path, _to: &Path) -> ModgenResult<()> {
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> ModgenResult<()> {
        Ok(())
    }

    fn copy_file(&self, _from: &Path, _to: &Path) -> ModgenResult<()> {
        Ok(())
    }

    fn copy_dir(&self, _from: &Path, _to: &Path) -> ModgenResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeClasses {
    files: HashMap<String, PathBuf>,
    parents: HashMap<String, String>,
}

impl ClassResolver for FakeClasses {
    fn class_exists(&self, class: &str) -> bool {
        self.files.contains_key(class)
    }

    fn class_file(&self, class: &str) -> Option<PathBuf> {
        self.files.get(class).cloned()
    }

    fn parent_class(&self, class: &str) -> Option<String> {
        self.parents.get(class).cloned()
    }
}

struct FakeShop;

impl ShopConfig for FakeShop {
    fn shop_base_path(&self) -> String {
        "/var/www/shop/source/".into()
    }

    fn vendor_path(&self) -> PathBuf {
        PathBuf::from("/var/www/shop/source/modules/ab")
    }
}

const ARTICLE: &str = r"OxidEsales\Eshop\Application\Model\Article";
const ARTICLE_FILE: &str = "/var/www/shop/source/Application/Model/Article.php";
const LEGACY_ARTICLE: &str = "oxarticle";

fn validator() -> ModuleValidator {
    let mut classes = FakeClasses::default();
    classes.files.insert(ARTICLE.into(), ARTICLE_FILE.into());
    classes.files.insert(
        LEGACY_ARTICLE.into(),
        "/var/www/shop/source/Core/BackwardCompatibility/oxarticle.php".into(),
    );
    classes
        .parents
        .insert(LEGACY_ARTICLE.into(), ARTICLE.into());

    let mut fs = FakeFs::default();
    fs.files.insert(ARTICLE_FILE.into());
    fs.dirs
        .insert(PathBuf::from("/var/www/shop/source/modules/ab/Existing"));

    ModuleValidator::new(Box::new(fs), Box::new(classes), Box::new(FakeShop))
}

fn parser() -> MetadataParser {
    MetadataParser::new(validator())
}

fn descriptor(json: &str) -> ModuleDescriptor {
    ModuleDescriptor::from_json(json).unwrap()
}

// ============================================================================
// Validator
// ============================================================================

#[test]
fn vendor_prefix_rules() {
    for prefix in ["ab", "xyz", "oxps"] {
        assert!(DomainValidator::validate_vendor_prefix(prefix));
    }
    for prefix in ["a", "abcde", "a1", "aB", "ab2c"] {
        assert!(!DomainValidator::validate_vendor_prefix(prefix), "{prefix}");
    }
}

#[test]
fn camel_case_rules() {
    assert!(DomainValidator::validate_camel_case_name("MyModule"));
    assert!(DomainValidator::validate_camel_case_name("A1"));
    assert!(!DomainValidator::validate_camel_case_name(""));
    assert!(!DomainValidator::validate_camel_case_name("myModule"));
}

#[test]
fn human_readable_module_name() {
    assert_eq!(
        DomainValidator::camel_case_to_human_readable("MyModule2Extra"),
        "My Module 2 Extra"
    );
}

#[test]
fn multi_line_not_empty_rule() {
    assert_eq!(
        parse_multi_line_input("Foo\n\nFoo\nbar", LineRule::NotEmpty),
        vec!["Foo", "bar"]
    );
}

#[test]
fn blocks_data_layout() {
    let blocks = parse_blocks_data("header@tpl/header.tpl\nfooter@tpl/footer.tpl", "ab", "Mod");

    assert_eq!(blocks.keys().collect::<Vec<_>>(), vec!["_header", "_footer"]);
    assert_eq!(
        blocks["_footer"],
        BlockDefinition {
            template: "tpl/footer.tpl".into(),
            block: "footer".into(),
            file: "Application/views/blocks/abMod_footer.tpl".into(),
        }
    );
}

#[test]
fn class_links_are_shop_relative() {
    let links = validator().validate_and_link_classes(&format!("{ARTICLE}\n{LEGACY_ARTICLE}\nNope"));

    assert_eq!(links.len(), 2);
    assert_eq!(links[ARTICLE], "Application/Model/");
    assert_eq!(links[LEGACY_ARTICLE], "Application/Model/");
}

#[test]
fn module_exists_checks_vendor_directory() {
    let validator = validator();
    assert!(validator.module_exists("Existing"));
    assert!(!validator.module_exists("Missing"));
    assert!(!validator.module_exists(""));
}

// ============================================================================
// MetadataParser
// ============================================================================

#[test]
fn components_are_empty_without_files_mapping() {
    for json in [
        r#"{"id": "abMod"}"#,
        r#"{"id": "abMod", "files": "Application/Controller/x.php"}"#,
        r#"{"id": "abMod", "files": ["ab/Mod/Application/Controller/abModPage.php"]}"#,
    ] {
        let options = parser().parse_metadata(&descriptor(json), "ab", "Mod");
        assert!(options.controllers.is_empty(), "{json}");
        assert!(options.models.is_empty(), "{json}");
        assert!(options.lists.is_empty(), "{json}");
        assert!(options.widgets.is_empty(), "{json}");
    }
}

#[test]
fn select_setting_lists_its_options() {
    let options = parser().parse_metadata(
        &descriptor(
            r#"{"id": "abMod", "settings": [
                {"name": "abModFoo", "type": "select", "value": "x", "constrains": "a|b|c"}
            ]}"#,
        ),
        "ab",
        "Mod",
    );

    assert_eq!(
        options.settings,
        vec![ModuleSetting::new("Foo", SettingKind::Select, "a\nb\nc")]
    );
}

#[test]
fn model_and_list_files_are_disjoint() {
    let options = parser().parse_metadata(
        &descriptor(
            r#"{"id": "abMod", "files": {
                "abModOrder": "ab/Mod/Application/Model/abModOrder.php",
                "abModOrderList": "ab/Mod/Application/Model/abModOrderList.php"
            }}"#,
        ),
        "ab",
        "Mod",
    );

    assert_eq!(options.models, vec!["Order"]);
    assert_eq!(options.lists, vec!["OrderList"]);
}

#[test]
fn parsing_is_idempotent() {
    let parser = parser();
    let descriptor = descriptor(&format!(
        r#"{{
            "id": "abMod",
            "extend": {{"{}": "ab/Mod/Application/Model/abModArticle"}},
            "files": {{"abModPage": "ab/Mod/Application/Controller/abModPage.php"}},
            "blocks": [{{"block": "b", "template": "t.tpl", "file": "f"}}],
            "settings": [{{"name": "abModOn", "type": "bool", "value": false}}]
        }}"#,
        ARTICLE.replace('\\', "\\\\")
    ));

    let first = parser.parse_metadata(&descriptor, "ab", "Mod");
    let second = parser.parse_metadata(&descriptor, "ab", "Mod");

    assert_eq!(first, second);
    assert_eq!(first.extend_classes.len(), 1);
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn built_descriptor_parses_back_to_the_same_options() {
    let module = ModuleInfo::new("ab", "Mod").unwrap();
    let validator = validator();

    let form = ModuleForm::from_toml(&format!(
        r#"
extend = "{}"
controllers = "Page\nFeed"
models = "Order"
lists = "OrderList"
widgets = "Teaser"
blocks = "header@layout/base.tpl\nfooter@layout/base.tpl"

[[settings]]
name = "Enabled"
type = "bool"
value = "1"

[[settings]]
name = "Limit"
type = "num"
value = "25"

[[settings]]
name = "Mode"
type = "select"
value = "fast\nsafe"

[[settings]]
name = "Colors"
type = "arr"
value = "red\ngreen"

[[settings]]
name = "Labels"
type = "aarr"
value = "a => Alpha\nb => Beta\n"
"#,
        ARTICLE.replace('\\', "\\\\")
    ))
    .unwrap();

    let options = validator.collect_options(&module, &form);
    assert_eq!(options.settings.len(), 5);
    assert_eq!(options.extend_classes.len(), 1);

    let built = ModuleDescriptor::build(&module, &options);
    let reparsed = ModuleDescriptor::from_json(&built.to_json_pretty().unwrap()).unwrap();
    let parsed = MetadataParser::new(validator).parse_metadata(&reparsed, "ab", "Mod");

    assert_eq!(parsed, options);
}
