//! Static shop configuration adapter.

use std::path::{MAIN_SEPARATOR, PathBuf};

use modgen_core::application::ports::ShopConfig;

/// [`ShopConfig`] with fixed paths, usually built from the CLI config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticShopConfig {
    base_path: PathBuf,
    modules_path: PathBuf,
    vendor: String,
}

impl StaticShopConfig {
    /// Shop sources at `base_path`, modules under `{base_path}/modules`.
    pub fn new(base_path: impl Into<PathBuf>, vendor: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            modules_path: base_path.join("modules"),
            base_path,
            vendor: vendor.into(),
        }
    }

    /// Use a modules directory outside the shop sources.
    pub fn with_modules_path(mut self, modules_path: impl Into<PathBuf>) -> Self {
        self.modules_path = modules_path.into();
        self
    }
}

impl ShopConfig for StaticShopConfig {
    fn shop_base_path(&self) -> String {
        let mut base = self.base_path.to_string_lossy().into_owned();
        if !base.ends_with(MAIN_SEPARATOR) {
            base.push(MAIN_SEPARATOR);
        }
        base
    }

    fn vendor_path(&self) -> PathBuf {
        self.modules_path.join(&self.vendor)
    }
}
