//! End-to-end generation through the real adapters.

use std::path::{Path, PathBuf};

use modgen_adapters::{
    ClassMapResolver, LocalFilesystem, MemoryFilesystem, PlaceholderEngine, StaticShopConfig,
};
use modgen_core::{
    application::{
        ApplicationError, Filesystem, MetadataParser, ModuleGenerator, ModuleValidator,
        RenderService,
    },
    domain::{GenerationOptions, ModuleDescriptor, ModuleForm, ModuleInfo},
    error::ModgenError,
};

const SHOP: &str = "/shop/source";
const ARTICLE: &str = r"OxidEsales\Eshop\Application\Model\Article";

fn skeleton(fs: MemoryFilesystem) -> MemoryFilesystem {
    fs.with_file(
        "/skel/module/composer.json.tpl",
        r#"{"name": "[{$sVendorPrefix}]/[{$sModuleName}]"}"#,
    )
    .with_file("/skel/module/Core/Module.php.tpl", "[{$sFileComment}]class [{$sModuleName}]Module")
    .with_file("/skel/module/docs/README.txt", "[{$sModuleTitle}] ([{$sModuleId}])")
    .with_file(
        "/skel/module/Application/translations/de/module_lang.php.tpl",
        "lang de [{$sModuleId}]",
    )
    .with_file("/skel/comment.tpl", "/* [{$sModuleTitle}] [{$sYear}] */\n")
    .with_file("/skel/classes/extend.php.tpl", "[{$v6Namespace}]\\[{$sClassRealName}] in [{$sFilePath}]")
    .with_file("/skel/classes/controller.php.tpl", "class [{$sClassRealName}] in [{$sFilePath}]")
    .with_file("/skel/classes/model.php.tpl", "model [{$sClassRealName}]")
    .with_file("/skel/classes/list.php.tpl", "list [{$sClassRealName}]")
    .with_file("/skel/classes/widget.php.tpl", "widget [{$sClassRealName}]")
    .with_file(format!("{SHOP}/Application/Model/Article.php"), "<?php")
}

fn validator(fs: &MemoryFilesystem) -> ModuleValidator {
    let classes =
        ClassMapResolver::new().with_class(ARTICLE, format!("{SHOP}/Application/Model/Article.php"));
    ModuleValidator::new(
        Box::new(fs.clone()),
        Box::new(classes),
        Box::new(StaticShopConfig::new(SHOP, "ab")),
    )
}

fn generator(fs: &MemoryFilesystem) -> ModuleGenerator {
    let renderer = RenderService::new(
        Box::new(PlaceholderEngine::new(Box::new(fs.clone()))),
        Box::new(fs.clone()),
        "/skel/comment.tpl",
    );
    ModuleGenerator::new(validator(fs), renderer, "/skel")
}

fn options(fs: &MemoryFilesystem, module: &ModuleInfo) -> GenerationOptions {
    let form = ModuleForm::from_toml(&format!(
        r#"
extend = "{}"
controllers = "Page"
models = "Order"
lists = "OrderList"
widgets = "Teaser"
blocks = "header@layout/base.tpl"

[[settings]]
name = "Limit"
type = "num"
value = "10"
"#,
        ARTICLE.replace('\\', "\\\\")
    ))
    .unwrap();

    validator(fs).collect_options(module, &form)
}

fn read(fs: &MemoryFilesystem, path: &str) -> String {
    fs.read_file(Path::new(path))
        .unwrap_or_else(|| panic!("missing {path}"))
}

#[test]
fn generates_a_rendered_module_in_memory() {
    let fs = skeleton(MemoryFilesystem::new());
    let module = ModuleInfo::new("ab", "Mod").unwrap();
    let options = options(&fs, &module);

    let report = generator(&fs).generate(&module, &options, false).unwrap();

    assert_eq!(report.module_dir, PathBuf::from("/shop/source/modules/ab/Mod"));
    assert_eq!(report.class_files, 5);
    // composer, Module, README, de translation and the five classes.
    assert_eq!(report.rendered_files, 9);

    let root = "/shop/source/modules/ab/Mod";
    assert_eq!(read(&fs, &format!("{root}/composer.json")), r#"{"name": "ab/Mod"}"#);
    assert!(!fs.is_file(Path::new(&format!("{root}/composer.json.tpl"))));
    assert_eq!(read(&fs, &format!("{root}/docs/README.txt")), "Mod (abMod)");
    assert_eq!(
        read(&fs, &format!("{root}/Application/translations/de/abMod_de_lang.php")),
        "lang de abMod"
    );
    assert!(read(&fs, &format!("{root}/Core/ModModule.php")).starts_with("/* Mod "));

    assert_eq!(
        read(&fs, &format!("{root}/Application/Model/abModArticle.php")),
        r"OxidEsales\Eshop\Application\Model\Article in Application/Model/abModArticle.php"
    );
    assert_eq!(
        read(&fs, &format!("{root}/Application/Controller/abModPage.php")),
        "class abModPage in Application/Controller/abModPage.php"
    );
    assert_eq!(read(&fs, &format!("{root}/Application/Model/abModOrderList.php")), "list abModOrderList");
    assert_eq!(
        read(&fs, &format!("{root}/Application/Component/Widget/abModTeaser.php")),
        "widget abModTeaser"
    );
}

#[test]
fn written_descriptor_parses_back_to_the_options() {
    let fs = skeleton(MemoryFilesystem::new());
    let module = ModuleInfo::new("ab", "Mod").unwrap();
    let options = options(&fs, &module);

    let report = generator(&fs).generate(&module, &options, false).unwrap();
    let descriptor =
        ModuleDescriptor::from_json(&fs.read_to_string(&report.descriptor_path).unwrap()).unwrap();

    let parsed = MetadataParser::new(validator(&fs)).parse_metadata(&descriptor, "ab", "Mod");
    assert_eq!(parsed, options);
}

#[test]
fn second_generation_needs_overwrite() {
    let fs = skeleton(MemoryFilesystem::new());
    let module = ModuleInfo::new("ab", "Mod").unwrap();
    let mut generator = generator(&fs);

    generator
        .generate(&module, &GenerationOptions::default(), false)
        .unwrap();
    let err = generator
        .generate(&module, &GenerationOptions::default(), false)
        .unwrap_err();
    assert!(matches!(
        err,
        ModgenError::Application(ApplicationError::ModuleExists { .. })
    ));

    generator
        .generate(&module, &GenerationOptions::default(), true)
        .unwrap();
}

#[test]
fn generates_onto_disk() {
    let temp = tempfile::tempdir().unwrap();
    let skel = temp.path().join("skel");
    let shop = temp.path().join("shop");
    let fs = LocalFilesystem::new();

    fs.create_file(&skel.join("module/composer.json.tpl"), "[{$sModuleId}]")
        .unwrap();
    fs.create_file(&skel.join("classes/model.php.tpl"), "model [{$sClassRealName}]")
        .unwrap();

    let validator = ModuleValidator::new(
        Box::new(fs),
        Box::new(ClassMapResolver::new()),
        Box::new(StaticShopConfig::new(&shop, "ab")),
    );
    let renderer = RenderService::new(
        Box::new(PlaceholderEngine::new(Box::new(fs))),
        Box::new(fs),
        skel.join("comment.tpl"),
    );
    let mut generator = ModuleGenerator::new(validator, renderer, &skel);

    let module = ModuleInfo::new("ab", "Shop").unwrap();
    let mut options = GenerationOptions::default();
    options.models.push("Order".into());

    let report = generator.generate(&module, &options, false).unwrap();

    assert_eq!(report.module_dir, shop.join("modules/ab/Shop"));
    assert_eq!(
        std::fs::read_to_string(report.module_dir.join("composer.json")).unwrap(),
        "abShop"
    );
    assert_eq!(
        std::fs::read_to_string(report.module_dir.join("Application/Model/abShopOrder.php")).unwrap(),
        "model abShopOrder"
    );
    assert!(report.descriptor_path.is_file());
}

#[test]
fn hostile_options_stay_inside_the_module_directory() {
    let temp = tempfile::tempdir().unwrap();
    let skel = temp.path().join("skel");
    let shop = temp.path().join("shop");
    let fs = LocalFilesystem::new();

    fs.create_file(&skel.join("module/composer.json.tpl"), "[{$sModuleId}]")
        .unwrap();
    for template in ["extend", "controller"] {
        fs.create_file(&skel.join(format!("classes/{template}.php.tpl")), template)
            .unwrap();
    }

    let validator = ModuleValidator::new(
        Box::new(fs),
        Box::new(ClassMapResolver::new()),
        Box::new(StaticShopConfig::new(&shop, "ab")),
    );
    let renderer = RenderService::new(
        Box::new(PlaceholderEngine::new(Box::new(fs))),
        Box::new(fs),
        skel.join("comment.tpl"),
    );
    let mut generator = ModuleGenerator::new(validator, renderer, &skel);

    let options = GenerationOptions::from_json(
        r#"{
            "aNewControllers": ["/../../../../../../escaped_ctrl"],
            "aExtendClasses": {"Nope\\Unknown": "../../../../../"}
        }"#,
    )
    .unwrap();
    let module = ModuleInfo::new("ab", "Mod").unwrap();

    let report = generator.generate(&module, &options, false).unwrap();

    assert_eq!(report.class_files, 0);
    assert!(!shop.join("escaped_ctrl.php").exists());
    assert!(!temp.path().join("escaped_ctrl.php").exists());
    let descriptor = std::fs::read_to_string(&report.descriptor_path).unwrap();
    assert!(!descriptor.contains("escaped_ctrl"));
    assert!(!descriptor.contains("Unknown"));
}
