//! Module generator - main application orchestrator.
//!
//! This service coordinates one generation pass:
//! 1. Refuse to touch an existing module unless asked to
//! 2. Copy the module skeleton
//! 3. Copy one class template per extended class and new component
//! 4. Write the module descriptor
//! 5. Render every planned file in place

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        services::{render_service::RenderService, validator::ModuleValidator},
    },
    domain::{GenerationOptions, ModuleDescriptor, ModuleInfo, RenderPlan},
    error::ModgenResult,
};

/// Descriptor file written into every generated module.
pub const DESCRIPTOR_FILE: &str = "metadata.json";

/// Skeleton subdirectory copied as the module root.
pub const SKELETON_MODULE_DIR: &str = "module";

/// Skeleton subdirectory holding the class templates.
pub const SKELETON_CLASSES_DIR: &str = "classes";

/// Summary of a finished generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub module_dir: PathBuf,
    pub descriptor_path: PathBuf,
    pub class_files: usize,
    pub rendered_files: usize,
}

pub struct ModuleGenerator {
    validator: ModuleValidator,
    renderer: RenderService,
    skeleton_dir: PathBuf,
}

impl ModuleGenerator {
    pub fn new(
        validator: ModuleValidator,
        renderer: RenderService,
        skeleton_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            validator,
            renderer,
            skeleton_dir: skeleton_dir.into(),
        }
    }

    pub fn validator(&self) -> &ModuleValidator {
        &self.validator
    }

    /// Where `module` is (or would be) generated.
    pub fn module_dir(&self, module: &ModuleInfo) -> PathBuf {
        self.validator.module_dir(module.name())
    }

    /// The render plan and descriptor a generation pass would produce,
    /// without writing anything.
    ///
    /// `options` are normalized first, see
    /// [`ModuleValidator::normalize_options`].
    pub fn preview(
        &self,
        module: &ModuleInfo,
        options: &GenerationOptions,
    ) -> (RenderPlan, ModuleDescriptor) {
        let options = self.validator.normalize_options(module, options);
        (
            RenderPlan::for_options(module, &options),
            ModuleDescriptor::build(module, &options),
        )
    }

    /// Generate `module` from `options`. Entries the validator would reject
    /// are dropped first, so every written file stays inside the module
    /// directory.
    ///
    /// With `overwrite` an existing module directory is regenerated in
    /// place. Not transactional.
    #[instrument(skip_all, fields(module = %module, overwrite))]
    pub fn generate(
        &mut self,
        module: &ModuleInfo,
        options: &GenerationOptions,
        overwrite: bool,
    ) -> ModgenResult<GenerationReport> {
        let module_dir = self.module_dir(module);

        if self.validator.module_exists(module.name()) && !overwrite {
            return Err(ApplicationError::ModuleExists { path: module_dir }.into());
        }

        let skeleton = self.skeleton_dir.join(SKELETON_MODULE_DIR);
        if !self.validator.filesystem().is_dir(&skeleton) {
            return Err(ApplicationError::SkeletonMissing { path: skeleton }.into());
        }

        info!(dir = %module_dir.display(), "Generating module");
        let fs = self.validator.filesystem();
        fs.copy_dir(&skeleton, &module_dir)?;

        let (plan, descriptor) = self.preview(module, options);
        let class_files = self.copy_class_templates(&plan, &module_dir)?;

        let descriptor_path = module_dir.join(DESCRIPTOR_FILE);
        self.validator
            .filesystem()
            .create_file(&descriptor_path, &descriptor.to_json_pretty()?)?;

        let rendered_files = self
            .renderer
            .render_module_files(module, &module_dir, &plan)?;

        info!(class_files, rendered_files, "Module generated");
        Ok(GenerationReport {
            module_dir,
            descriptor_path,
            class_files,
            rendered_files,
        })
    }

    fn copy_class_templates(&self, plan: &RenderPlan, module_dir: &Path) -> ModgenResult<usize> {
        let fs = self.validator.filesystem();
        let templates = self.skeleton_dir.join(SKELETON_CLASSES_DIR);
        let mut copied = 0;

        for (path, class) in plan.classes() {
            let template = templates.join(class.template);
            if !fs.is_file(&template) {
                return Err(ApplicationError::SkeletonMissing { path: template }.into());
            }

            fs.copy_file(&template, &module_dir.join(path))?;
            copied += 1;
        }

        Ok(copied)
    }
}
