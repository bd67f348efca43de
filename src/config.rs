use std::fs;
use std::path::Path;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON-LD context carried through untouched when present.
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub tutor_config: TutorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_persona_prompt")]
    pub persona_prompt: String,
}

fn default_provider() -> String {
    "openai_compatible".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_persona_prompt() -> String {
    "You are a knowledgeable tutor specializing in Monte Carlo algorithms for data analytics. \
     You provide clear, concise explanations with examples. You should adapt your responses to \
     be practical and applicable to real-world scenarios. Always structure your responses \
     according to the schema. For code examples, use Python or JavaScript. Keep explanations \
     focused on a 1-day intensive course level."
        .to_string()
}

impl Config {
    /// Load configuration from a JSON-LD or YAML file, substituting
    /// `${VAR_NAME}` references from the environment first. References to
    /// unset variables stay verbatim.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = load_text_file_with_guess_encoding(path)?;
        if content.is_empty() {
            anyhow::bail!("Failed to read configuration file: {}", path);
        }
        let content = substitute_env_vars(&content);

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let json_value: Value = serde_json::from_str(&content)?;
            let config: Config = serde_json::from_value(json_value)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            persona_prompt: default_persona_prompt(),
        }
    }
}

/// Replace environment variables: ${VAR_NAME}
fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").unwrap();
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = caps.get(1).unwrap().as_str();
            std::env::var(var_name).unwrap_or_else(|_| caps.get(0).unwrap().as_str().to_string())
        })
        .to_string()
}

/// Load text file with encoding detection
fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;

    // UTF-8 first, dropping a BOM if present
    let utf8_bytes = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        &bytes[..]
    };
    if let Ok(content) = std::str::from_utf8(utf8_bytes) {
        return Ok(content.to_string());
    }

    // Fall back to GBK, then lossy UTF-8
    let (cow, _, had_errors) = encoding_rs::GBK.decode(&bytes);
    if !had_errors {
        return Ok(cow.to_string());
    }
    let (cow, _, _) = encoding_rs::UTF_8.decode(&bytes);
    Ok(cow.to_string())
}
