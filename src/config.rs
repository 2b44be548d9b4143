//! Configuration loading for the engine and its shells
//!
//! A deployment picks its band taxonomy and resolution policy here, once,
//! explicitly. The same file carries the model artifact location and the
//! HTTP binding so `evaluate` and `serve` read one source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::ResolutionPolicy;
use crate::core::{EngineError, Result, Taxonomy};

/// Resolution settings consumed by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Band taxonomy this deployment resolves into
    #[serde(default = "default_taxonomy")]
    pub taxonomy: Taxonomy,

    /// Override (threshold rules win) or model-trust (classifier label wins)
    #[serde(default = "default_policy")]
    pub policy: ResolutionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            taxonomy: default_taxonomy(),
            policy: default_policy(),
        }
    }
}

fn default_taxonomy() -> Taxonomy {
    Taxonomy::Obp4
}

fn default_policy() -> ResolutionPolicy {
    ResolutionPolicy::Override
}

/// Model artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model/exam_model.json")
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5080
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BandmapConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl BandmapConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| EngineError::config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Load from an explicit path, or fall back to defaults when none given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Default configuration file written by `bandmap init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# bandmap configuration

[engine]
# Band taxonomy: "obp4" (Basic/Intermediate/Proficient/Exemplary)
# or "legacy5" (Beginning .. Advanced)
taxonomy = "obp4"
# Resolution policy: "override" applies the deterministic score thresholds,
# "model-trust" reports the classifier's label unchanged
policy = "override"

[model]
# JSON model artifact, loaded once at startup
path = "model/exam_model.json"

[server]
host = "127.0.0.1"
port = 5080
"#;
