use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub transfer: TransferConfig,
}

/// Batch runner settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TransferConfig {
    /// Maximum fractional digits accepted in input amounts
    pub max_scale: u32,
    /// Minimum fractional digits written to output files; never rounds
    pub display_scale: u32,
    pub input_dir: String,
    pub output_dir: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_scale: 8,
            display_scale: 2,
            input_dir: "fixtures".to_string(),
            output_dir: "output".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "account_transfer.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            enable_tracing: false,
            transfer: TransferConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse config file: {}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
