//! Implementation of the `modgen parse` command.
//!
//! Reads a module descriptor and prints the generation options it maps back
//! to, as JSON on stdout. The output can be fed to
//! `modgen generate --options`.

use tracing::{info, instrument};

use modgen_core::{domain::ModuleDescriptor, error::ModgenError};

use crate::{
    cli::ParseArgs, commands::read_input, config::AppConfig, error::CliResult,
    output::OutputManager, wiring,
};

#[instrument(skip_all, fields(descriptor = %args.descriptor.display()))]
pub fn execute(args: ParseArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let text = read_input(&args.descriptor)?;
    let descriptor = ModuleDescriptor::from_json(&text).map_err(ModgenError::from)?;

    let parser = wiring::parser(&config, &args.module.vendor)?;
    let options = parser.parse_metadata(&descriptor, &args.module.vendor, &args.module.name);

    info!(
        extended = options.extend_classes.len(),
        blocks = options.blocks.len(),
        settings = options.settings.len(),
        "Descriptor parsed"
    );

    output.data(&options.to_json_pretty().map_err(ModgenError::from)?)?;
    Ok(())
}
