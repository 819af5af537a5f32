use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CounselError;
use crate::llm::GeminiClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub api_key_env: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings {
                model: "gemini-pro".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                base_url: None,
            },
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("counsel")
            .join("config.toml")
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), CounselError> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CounselError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// API key from the environment variable named in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env).ok()
    }

    /// Build a Gemini client from the current settings.
    pub fn build_client(&self) -> Result<GeminiClient, CounselError> {
        let api_key = self.api_key().ok_or_else(|| {
            CounselError::Config(format!(
                "API key not set; export {} with your Gemini API key",
                self.llm.api_key_env
            ))
        })?;

        let mut client = GeminiClient::new(api_key).with_model(self.llm.model.clone());
        if let Some(ref base_url) = self.llm.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gemini-pro");
        assert_eq!(settings.llm.api_key_env, "GEMINI_API_KEY");
        assert!(settings.llm.base_url.is_none());
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let mut settings = Settings::default();
        settings.llm.model = "gemini-1.5-pro".to_string();
        settings.llm.base_url = Some("http://localhost:8080".to_string());

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.llm.model, "gemini-1.5-pro");
        assert_eq!(parsed.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(parsed.llm.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_missing_base_url_defaults_to_none() {
        let parsed: Settings = toml::from_str(
            "[llm]\nmodel = \"gemini-pro\"\napi_key_env = \"GEMINI_API_KEY\"\n",
        )
        .unwrap();
        assert!(parsed.llm.base_url.is_none());
    }
}
