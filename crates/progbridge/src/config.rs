//! Configuration for the progbridge CLI.
//!
//! Loads config from:
//! 1. Global: ~/.config/progbridge/config.toml
//! 2. Per-project: .progbridge/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [robot]
//! program_name = "WELD01"
//! comment = "Cell 3 weld path"
//!
//! [plc]
//! program_name = "Main"
//! timestamp = true
//!
//! [output]
//! dir = "converted"
//! ```
//!
//! Files are merged key by key, so a project file only needs the keys it
//! changes.

use anyhow::Context;
use progbridge_translate::{PlcOptions, RobotOptions, TranslateOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for converted files when no `-o` is given.
    pub dir: Option<PathBuf>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct ProgbridgeConfig {
    pub robot: RobotOptions,
    pub plc: PlcOptions,
    pub output: OutputConfig,
}

impl ProgbridgeConfig {
    /// Load configuration for a project.
    ///
    /// Missing files are skipped; unreadable or malformed files are errors.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), &root.join(".progbridge").join("config.toml"))
    }

    fn load_from(global: Option<&Path>, project: &Path) -> anyhow::Result<Self> {
        let mut merged = toml::Table::new();
        for path in global.into_iter().chain(std::iter::once(project)) {
            if let Some(table) = Self::load_table(path)? {
                tracing::debug!(path = %path.display(), "loaded config");
                merge(&mut merged, table);
            }
        }
        let config: Self = toml::Value::Table(merged)
            .try_into()
            .context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be written into a generated program.
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.robot.comment.contains(['"', '\n', '\r']),
            "robot.comment must not contain quotes or line breaks"
        );
        Ok(())
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("progbridge").join("config.toml"))
    }

    fn load_table(path: &Path) -> anyhow::Result<Option<toml::Table>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let table = content
            .parse::<toml::Table>()
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(table))
    }

    /// Options handed to the translators.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            robot: self.robot.clone(),
            plc: self.plc.clone(),
        }
    }
}

/// Merge `other` into `base`; nested tables merge, other values replace.
fn merge(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
