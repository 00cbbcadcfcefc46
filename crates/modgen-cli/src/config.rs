//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `MODGEN__SECTION__KEY` (e.g. `MODGEN__SHOP__BASE_PATH`)
//! 3. Config file (`--config`, or the default location when it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".modgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shop installation.
    pub shop: ShopSection,
    /// Skeleton templates.
    pub templates: TemplateSection,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSection {
    /// Root of the shop sources.
    pub base_path: PathBuf,
    /// Modules directory; `{base_path}/modules` when unset.
    pub modules_path: Option<PathBuf>,
    /// TOML class map of the shop. Without one, no class can be extended.
    pub class_map: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    /// Skeleton directory with `module/` and `classes/`.
    pub skeleton_dir: PathBuf,
    /// File header comment template; `{skeleton_dir}/comment.inc.php.tpl`
    /// when unset.
    pub comment_template: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shop: ShopSection {
                base_path: PathBuf::from("source"),
                modules_path: None,
                class_map: None,
            },
            templates: TemplateSection {
                skeleton_dir: PathBuf::from("skeleton"),
                comment_template: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. When
    /// it is `None` the local `.modgen.toml` and then the default location
    /// are used if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to prepare default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                builder = builder.add_source(config::File::from(path.as_path()));
            }
            None => {
                if let Some(path) = Self::discover() {
                    tracing::debug!(path = %path.display(), "Using config file");
                    builder = builder.add_source(config::File::from(path.as_path()));
                }
            }
        }

        builder
            .add_source(
                config::Environment::with_prefix("MODGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file `load(None)` reads, if any.
    pub fn discover() -> Option<PathBuf> {
        [PathBuf::from(LOCAL_CONFIG_FILE), Self::config_path()]
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modgen", "modgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Directory holding the vendor directories.
    pub fn modules_path(&self) -> PathBuf {
        self.shop
            .modules_path
            .clone()
            .unwrap_or_else(|| self.shop.base_path.join("modules"))
    }

    pub fn comment_template(&self) -> PathBuf {
        self.templates
            .comment_template
            .clone()
            .unwrap_or_else(|| self.templates.skeleton_dir.join("comment.inc.php.tpl"))
    }

    pub fn skeleton_dir(&self) -> &Path {
        &self.templates.skeleton_dir
    }
}
