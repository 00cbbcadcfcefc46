//! Implementation of the `modgen generate` command.
//!
//! Dispatch sequence:
//! 1. Validate vendor prefix and module name
//! 2. Build generation options from a form or read them ready-made
//! 3. Show the summary and confirm unless `--yes`, `--quiet` or non-interactive
//! 4. Early-exit with a preview if `--dry-run`
//! 5. Run the generator

use std::io::IsTerminal as _;
use std::path::Path;

use tracing::{debug, info, instrument};

use modgen_core::{
    application::ModuleGenerator,
    domain::{GenerationOptions, ModuleForm, ModuleInfo},
    error::ModgenError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    commands::read_input,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    wiring,
};

#[instrument(skip_all, fields(vendor = %args.module.vendor, name = %args.module.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Module identity
    let module =
        ModuleInfo::new(&args.module.vendor, &args.module.name).map_err(ModgenError::from)?;

    // 2. Options
    let mut generator = wiring::generator(&config, module.vendor_prefix())?;
    let options = load_options(&args, &module, &generator)?;
    let module_dir = generator.module_dir(&module);

    debug!(
        dir = %module_dir.display(),
        extended = options.extend_classes.len(),
        settings = options.settings.len(),
        "Options resolved"
    );

    // 3. Summary and confirmation
    let interactive = !global.quiet && !args.yes && !args.dry_run && std::io::stdin().is_terminal();
    if interactive {
        show_summary(&module, &options, &module_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return preview(&generator, &module, &options, &module_dir, &output);
    }

    // 5. Generate
    output.header(&format!("Generating '{module}'..."))?;
    let report = generator.generate(&module, &options, args.force)?;
    info!(
        class_files = report.class_files,
        rendered_files = report.rendered_files,
        "Generation completed"
    );

    output.success(&format!(
        "Module '{}' generated at {}",
        module.id(),
        report.module_dir.display()
    ))?;
    output.print(&format!(
        "  {} class file(s), {} rendered file(s)",
        report.class_files, report.rendered_files
    ))?;
    output.print(&format!("  Descriptor: {}", report.descriptor_path.display()))?;

    Ok(())
}

/// Options from `--form` or `--options`. Both go through the validator's
/// form rules.
fn load_options(
    args: &GenerateArgs,
    module: &ModuleInfo,
    generator: &ModuleGenerator,
) -> CliResult<GenerationOptions> {
    if let Some(path) = &args.form {
        let form = ModuleForm::from_toml(&read_input(path)?).map_err(ModgenError::from)?;
        return Ok(generator.validator().collect_options(module, &form));
    }

    if let Some(path) = &args.options {
        let options = GenerationOptions::from_json(&read_input(path)?).map_err(ModgenError::from)?;
        return Ok(generator.validator().normalize_options(module, &options));
    }

    Err(CliError::InvalidInput {
        message: "either --form or --options is required".into(),
        source: None,
    })
}

fn preview(
    generator: &ModuleGenerator,
    module: &ModuleInfo,
    options: &GenerationOptions,
    module_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let (plan, descriptor) = generator.preview(module, options);
    let json = descriptor.to_json_pretty().map_err(ModgenError::from)?;

    if output.format() == OutputFormat::Json {
        output.data(&json)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate '{}' at {}",
        module.id(),
        module_dir.display()
    ))?;
    for file in plan.files() {
        match &file.rename_to {
            Some(target) => output.print(&format!("  {} -> {target}", file.path))?,
            None => output.print(&format!("  {}", file.path))?,
        }
    }
    output.print("")?;
    output.print("Descriptor:")?;
    output.print(&json)?;
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_summary(
    module: &ModuleInfo,
    options: &GenerationOptions,
    module_dir: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Module")?;
    out.print(&format!("  Id:          {}", module.id()))?;
    out.print(&format!("  Title:       {}", module.title()))?;
    out.print(&format!("  Location:    {}", module_dir.display()))?;
    out.print(&format!("  Extends:     {}", options.extend_classes.len()))?;
    out.print(&format!(
        "  Components:  {} controller(s), {} model(s), {} list(s), {} widget(s)",
        options.controllers.len(),
        options.models.len(),
        options.lists.len(),
        options.widgets.len()
    ))?;
    out.print(&format!("  Blocks:      {}", options.blocks.len()))?;
    out.print(&format!("  Settings:    {}", options.settings.len()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation input".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
