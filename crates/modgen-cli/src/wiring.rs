//! Builds core services on top of the local adapters from [`AppConfig`].

use modgen_adapters::{ClassMapResolver, LocalFilesystem, PlaceholderEngine, StaticShopConfig};
use modgen_core::application::{MetadataParser, ModuleGenerator, ModuleValidator, RenderService};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Shop configuration for `vendor`.
pub fn shop_config(config: &AppConfig, vendor: &str) -> StaticShopConfig {
    StaticShopConfig::new(&config.shop.base_path, vendor).with_modules_path(config.modules_path())
}

/// Class map from `shop.class_map`, or an empty one when unset.
pub fn class_map(config: &AppConfig) -> CliResult<ClassMapResolver> {
    match &config.shop.class_map {
        Some(path) if !path.is_file() => Err(CliError::ConfigError {
            message: format!("class map not found: {}", path.display()),
            source: None,
        }),
        Some(path) => Ok(ClassMapResolver::load(path, &config.shop.base_path)?),
        None => {
            debug!("No class map configured, extended classes cannot be linked");
            Ok(ClassMapResolver::new())
        }
    }
}

pub fn validator(config: &AppConfig, vendor: &str) -> CliResult<ModuleValidator> {
    Ok(ModuleValidator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(class_map(config)?),
        Box::new(shop_config(config, vendor)),
    ))
}

pub fn parser(config: &AppConfig, vendor: &str) -> CliResult<MetadataParser> {
    Ok(MetadataParser::new(validator(config, vendor)?))
}

pub fn generator(config: &AppConfig, vendor: &str) -> CliResult<ModuleGenerator> {
    let renderer = RenderService::new(
        Box::new(PlaceholderEngine::new(Box::new(LocalFilesystem::new()))),
        Box::new(LocalFilesystem::new()),
        config.comment_template(),
    );

    Ok(ModuleGenerator::new(
        validator(config, vendor)?,
        renderer,
        config.skeleton_dir(),
    ))
}
