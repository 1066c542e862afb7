use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bridge script run by the default command predictor. Reads the dialog
/// mapping from stdin and prints the JSON-encoded prediction.
pub const DEFAULT_BRIDGE_SCRIPT: &str = "import json, sys\n\
from rgm_inference import predict_contradiction\n\
print(json.dumps(predict_contradiction(json.load(sys.stdin))))\n";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Which backend reaches the contradiction model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PredictorConfig {
    Command {
        #[serde(default = "default_command")]
        command: String,
        #[serde(default = "default_args")]
        args: Vec<String>,
        #[serde(default)]
        env: HashMap<String, String>,
    },
    Http {
        url: String,
    },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::Command {
            command: default_command(),
            args: default_args(),
            env: HashMap::new(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_command() -> String {
    "python3".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-c".to_string(), DEFAULT_BRIDGE_SCRIPT.to_string()]
}
