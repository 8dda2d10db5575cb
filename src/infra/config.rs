use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use toml;

pub const DEFAULT_CONFIG_TOML_NAME: &str = "ecsup.toml";

/// Region used when neither the flag, the environment nor the config file
/// names one.
pub const DEFAULT_REGION: &str = "us-east-1";

pub fn default_config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/root"))
        .join(".config/ecsup")
}

#[derive(Deserialize, Debug, Default)]
pub struct AwsSection {
    pub region: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub aws: AwsSection,
}

impl AppConfig {
    /// Picks the region to use: an explicit override (flag or env) wins,
    /// then the config file, then the built-in default.
    pub fn resolve_region(&self, override_region: Option<String>) -> String {
        override_region
            .or_else(|| self.aws.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}

/// Loads `ecsup.toml` from the config dir. A missing file is not an error;
/// it just means defaults apply.
pub fn load_app_config(config_dir: &Path) -> Result<AppConfig> {
    let path = config_dir.join(DEFAULT_CONFIG_TOML_NAME);

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
    let config: AppConfig =
        toml::from_str(&content).with_context(|| format!("parsing {:?}", path))?;

    Ok(config)
}
