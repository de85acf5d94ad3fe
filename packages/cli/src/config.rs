use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "sall.config.json";

/// Sall configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched by `sall check` when no path is given
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// File extension of stylesheet sources, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Pretty-print snapshots printed by `sall ast`
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_extension() -> String {
    "sall".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory, falling back to defaults when the
    /// file does not exist
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", config_path.display(), e))?;
        tracing::debug!(path = %config_path.display(), "loaded config");

        Ok(config)
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            extension: default_extension(),
            pretty: default_pretty(),
        }
    }
}
