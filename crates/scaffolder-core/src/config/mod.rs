//! Session settings resolved from the environment

use crate::product::ProductConfig;
use crate::runtime::PackageManager;
use anyhow::Result;

/// Settings read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Package manager used for installs and scripts
    pub package_manager: PackageManager,
    /// Write files only; skip runtime checks, installs and the dev server
    pub skip_install: bool,
}

impl Settings {
    /// Read the product's environment variables
    pub fn from_env<C: ProductConfig>(config: &C) -> Result<Self> {
        Self::from_values(
            std::env::var(config.package_manager_env()).ok().as_deref(),
            std::env::var(config.skip_install_env()).ok().as_deref(),
        )
    }

    pub fn from_values(package_manager: Option<&str>, skip_install: Option<&str>) -> Result<Self> {
        let package_manager = match package_manager.map(str::trim) {
            None | Some("") => PackageManager::default(),
            Some(value) => value.parse().map_err(anyhow::Error::msg)?,
        };

        Ok(Self {
            package_manager,
            skip_install: skip_install.is_some_and(is_truthy),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
