use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Figma token (fallback when the env var is not set)
    /// WARNING: Stored in plaintext - prefer FIGMA_ACCESS_TOKEN or keychain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_token: Option<String>,
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults for the generate pipeline
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_json_path")]
    pub json_path: String,
    #[serde(default = "default_tsx_path")]
    pub tsx_path: String,
    #[serde(default = "default_screen_name")]
    pub screen_name: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            json_path: default_json_path(),
            tsx_path: default_tsx_path(),
            screen_name: default_screen_name(),
        }
    }
}

fn default_input_path() -> String {
    "input.json".to_string()
}

fn default_json_path() -> String {
    "output.json".to_string()
}

fn default_tsx_path() -> String {
    "output.tsx".to_string()
}

fn default_screen_name() -> String {
    "GeneratedScreen".to_string()
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "figx").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from file, returning defaults if not found
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_token(&self) -> Option<&str> {
        self.figma_token.as_deref()
    }

    pub fn set_token(&mut self, token: &str) {
        self.figma_token = Some(token.to_string());
    }

    pub fn remove_token(&mut self) {
        self.figma_token = None;
    }

    pub fn has_token(&self) -> bool {
        self.figma_token.is_some()
    }

    /// Get a configuration value by dotted key
    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "generate.input_path" => Some(self.generate.input_path.clone()),
            "generate.json_path" => Some(self.generate.json_path.clone()),
            "generate.tsx_path" => Some(self.generate.tsx_path.clone()),
            "generate.screen_name" => Some(self.generate.screen_name.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "generate.input_path" => self.generate.input_path = value.to_string(),
            "generate.json_path" => self.generate.json_path = value.to_string(),
            "generate.tsx_path" => self.generate.tsx_path = value.to_string(),
            "generate.screen_name" => self.generate.screen_name = value.to_string(),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Known configuration keys, for the config command help
    pub fn known_keys() -> &'static [&'static str] {
        &[
            "generate.input_path",
            "generate.json_path",
            "generate.tsx_path",
            "generate.screen_name",
        ]
    }
}
