use crate::prompt::templates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub prompts: PromptTemplates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
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

/// Instruction text for each task. `{code}` and `{language}` are substituted
/// when a prompt is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplates {
    #[serde(default = "default_convert_template")]
    pub convert: String,
    #[serde(default = "default_debug_template")]
    pub debug: String,
    #[serde(default = "default_check_quality_template")]
    pub check_quality: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
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

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            convert: default_convert_template(),
            debug: default_debug_template(),
            check_quality: default_check_quality_template(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    200
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_convert_template() -> String {
    templates::CONVERT.to_string()
}

fn default_debug_template() -> String {
    templates::DEBUG.to_string()
}

fn default_check_quality_template() -> String {
    templates::CHECK_QUALITY.to_string()
}
