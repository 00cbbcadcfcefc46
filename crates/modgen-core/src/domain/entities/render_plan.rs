use indexmap::IndexMap;

use crate::domain::entities::{
    descriptor::{component_class_name, short_class_name},
    module::ModuleInfo,
    options::GenerationOptions,
};
use crate::domain::value_objects::ComponentKind;

/// A skeleton file to render, relative to the module root.
///
/// When `rename_to` is set the rendered file is renamed to that name in the
/// same directory afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToProcess {
    pub path: String,
    pub rename_to: Option<String>,
}

/// Class variables a file is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassData {
    /// A new class: its full (module prefixed) name.
    Plain(String),
    /// An extension of a shop class: the extended class's short name and
    /// namespace.
    Extended { class_name: String, namespace: String },
}

/// A class file copied from a class template before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFile {
    pub template: &'static str,
    pub data: ClassData,
}

/// Class template for extensions of shop classes.
pub const EXTEND_TEMPLATE: &str = "extend.php.tpl";

/// Class template for new components of `kind`.
pub const fn component_template(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Controller => "controller.php.tpl",
        ComponentKind::Model => "model.php.tpl",
        ComponentKind::List => "list.php.tpl",
        ComponentKind::Widget => "widget.php.tpl",
    }
}

/// Everything the renderer touches for one module, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    files: Vec<FileToProcess>,
    classes: IndexMap<String, ClassFile>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed files every module skeleton ships.
    pub fn standard(module: &ModuleInfo) -> Self {
        let id = module.id();
        let name = module.name();

        Self::new()
            .with_renamed(
                "Application/translations/de/module_lang.php.tpl",
                format!("{id}_de_lang.php"),
            )
            .with_renamed(
                "Application/translations/en/module_lang.php.tpl",
                format!("{id}_en_lang.php"),
            )
            .with_renamed("Core/Module.php.tpl", format!("{name}Module.php"))
            .with_file("docs/install.sql")
            .with_file("docs/README.txt")
            .with_file("docs/uninstall.sql")
            .with_renamed(
                "Application/views/admin/de/module_lang.php.tpl",
                format!("{id}_admin_de_lang.php"),
            )
            .with_renamed(
                "Application/views/admin/en/module_lang.php.tpl",
                format!("{id}_admin_en_lang.php"),
            )
            .with_renamed(".ide-helper.php.tpl", ".ide-helper.php")
            .with_renamed("composer.json.tpl", "composer.json")
            .with_renamed("metadata.php.tpl", "metadata.php")
    }

    /// The standard files plus one class file per extended class and new
    /// component in `options`.
    pub fn for_options(module: &ModuleInfo, options: &GenerationOptions) -> Self {
        let mut plan = Self::standard(module);

        for (class, dir) in &options.extend_classes {
            let short = short_class_name(class);
            let path = format!(
                "{}{}.php",
                dir.trim_start_matches('/'),
                module.prefixed(short)
            );
            let namespace = class
                .rsplit_once('\\')
                .map(|(namespace, _)| namespace.to_string())
                .unwrap_or_default();

            plan.add_class(
                path,
                EXTEND_TEMPLATE,
                ClassData::Extended {
                    class_name: short.to_string(),
                    namespace,
                },
            );
        }

        for kind in ComponentKind::ALL {
            for name in options.components(kind) {
                let class = module.prefixed(&component_class_name(kind, name));
                let path = format!("{}{class}.php", kind.directory());
                plan.add_class(path, component_template(kind), ClassData::Plain(class));
            }
        }

        plan
    }

    pub fn add_file(&mut self, path: impl Into<String>, rename_to: Option<String>) {
        self.files.push(FileToProcess {
            path: path.into(),
            rename_to,
        });
    }

    /// Add a class file. It is rendered in place, after the standard files.
    pub fn add_class(&mut self, path: impl Into<String>, template: &'static str, data: ClassData) {
        let path = path.into();
        if !self.classes.contains_key(&path) {
            self.add_file(path.clone(), None);
        }
        self.classes.insert(path, ClassFile { template, data });
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.add_file(path, None);
        self
    }

    pub fn with_renamed(mut self, path: impl Into<String>, rename_to: impl Into<String>) -> Self {
        self.add_file(path, Some(rename_to.into()));
        self
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToProcess> {
        self.files.iter()
    }

    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassFile)> {
        self.classes.iter().map(|(path, class)| (path.as_str(), class))
    }

    pub fn class_for(&self, path: &str) -> Option<&ClassData> {
        self.classes.get(path).map(|class| &class.data)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
