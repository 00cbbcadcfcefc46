//! Render service - fills copied skeleton files in place.
//!
//! Files are rendered one at a time and overwritten where they are. There
//! is no rollback: a failure leaves the files rendered so far.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{Filesystem, TemplateEngine},
    domain::{ClassData, ModuleInfo, RenderPlan},
    error::ModgenResult,
};

/// Template variable names.
pub mod vars {
    pub const MODULE_ID: &str = "sModuleId";
    pub const VENDOR_PREFIX: &str = "sVendorPrefix";
    pub const MODULE_NAME: &str = "sModuleName";
    pub const MODULE_TITLE: &str = "sModuleTitle";
    pub const YEAR: &str = "sYear";
    pub const FILE_COMMENT: &str = "sFileComment";
    pub const SUB_PACKAGE: &str = "sSubPackage";
    pub const FILE_PATH: &str = "sFilePath";
    pub const CLASS_REAL_NAME: &str = "sClassRealName";
    pub const NAMESPACE: &str = "v6Namespace";
}

const PER_FILE_VARS: [&str; 3] = [vars::FILE_PATH, vars::CLASS_REAL_NAME, vars::NAMESPACE];

pub struct RenderService {
    engine: Box<dyn TemplateEngine>,
    filesystem: Box<dyn Filesystem>,
    comment_template: PathBuf,
}

impl RenderService {
    pub fn new(
        engine: Box<dyn TemplateEngine>,
        filesystem: Box<dyn Filesystem>,
        comment_template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            engine,
            filesystem,
            comment_template: comment_template.into(),
        }
    }

    /// Render every file of `plan` under `module_dir`.
    ///
    /// Files missing from the module directory are skipped. Returns the
    /// number of files rendered.
    #[instrument(skip_all, fields(module = %module, dir = %module_dir.display()))]
    pub fn render_module_files(
        &mut self,
        module: &ModuleInfo,
        module_dir: &Path,
        plan: &RenderPlan,
    ) -> ModgenResult<usize> {
        self.assign_module(module);

        if self.filesystem.is_file(&self.comment_template) {
            let comment = self.render_file_comment(module, "")?;
            self.engine.assign(vars::FILE_COMMENT, &comment);
        }

        let mut rendered = 0;
        for file in plan.files() {
            self.engine.assign(vars::FILE_PATH, &file.path);
            match plan.class_for(&file.path) {
                Some(ClassData::Extended {
                    class_name,
                    namespace,
                }) => {
                    self.engine.assign(vars::CLASS_REAL_NAME, class_name);
                    self.engine.assign(vars::NAMESPACE, namespace);
                }
                Some(ClassData::Plain(class_name)) => {
                    self.engine.assign(vars::CLASS_REAL_NAME, class_name);
                }
                None => {}
            }

            let full_path = module_dir.join(&file.path);
            let outcome = self.render_file(&full_path, file.rename_to.as_deref());

            for name in PER_FILE_VARS {
                self.engine.clear_assign(name);
            }

            if outcome? {
                rendered += 1;
            }
        }

        info!(rendered, planned = plan.file_count(), "Module files rendered");
        Ok(rendered)
    }

    /// Render the file header comment for `module`.
    pub fn render_file_comment(
        &mut self,
        module: &ModuleInfo,
        sub_package: &str,
    ) -> ModgenResult<String> {
        self.assign_module(module);
        if !sub_package.is_empty() {
            self.engine.assign(vars::SUB_PACKAGE, sub_package);
        }

        let comment = self.engine.fetch(&self.comment_template);
        self.engine.clear_assign(vars::SUB_PACKAGE);
        comment
    }

    fn assign_module(&mut self, module: &ModuleInfo) {
        self.engine.assign(vars::MODULE_ID, &module.id());
        self.engine.assign(vars::VENDOR_PREFIX, module.vendor_prefix());
        self.engine.assign(vars::MODULE_NAME, module.name());
        self.engine.assign(vars::MODULE_TITLE, &module.title());
        self.engine
            .assign(vars::YEAR, &chrono::Local::now().year().to_string());
    }

    /// Returns `false` when the file does not exist.
    fn render_file(&mut self, path: &Path, rename_to: Option<&str>) -> ModgenResult<bool> {
        if !self.filesystem.is_file(path) {
            debug!(path = %path.display(), "Skipping missing file");
            return Ok(false);
        }

        let content = self.engine.fetch(path)?;
        self.filesystem.create_file(path, &content)?;

        if let Some(name) = rename_to {
            let target = path.with_file_name(name.replace(".php.tpl", ".php"));
            trace!(from = %path.display(), to = %target.display(), "Renaming");
            self.filesystem.rename_file(path, &target)?;
        }

        Ok(true)
    }
}
