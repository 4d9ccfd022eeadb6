use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub model: String,
    pub api_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{}/.mag-narrative/config.yaml", home)
    }

    /// Resolves the effective configuration once, at startup: the config
    /// file if one exists, defaults otherwise, and in either case a key
    /// exported in the environment wins over a key saved in the file, so a
    /// stale config can never shadow a rotated credential.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path();
        let config_file = Path::new(&config_path);

        let mut config = if config_file.exists() {
            Self::load_from_file(config_file).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(key) = env_api_key() {
            config.ai.api_key = key;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path();
        self.save_to_file(config_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                model: DEFAULT_MODEL.to_string(),
                api_url: DEFAULT_API_URL.to_string(),
                api_key: env_api_key().unwrap_or_default(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

fn env_api_key() -> Option<String> {
    ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|key| !key.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_key_vars() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("GOOGLE_API_KEY");
    }

    #[test]
    #[serial]
    fn test_default_key_comes_from_environment() {
        clear_key_vars();
        std::env::set_var("GEMINI_API_KEY", "gem-key");
        assert_eq!(Config::default().ai.api_key, "gem-key");
        clear_key_vars();
    }

    #[test]
    #[serial]
    fn test_google_var_is_the_fallback_name() {
        clear_key_vars();
        std::env::set_var("GOOGLE_API_KEY", "goo-key");
        assert_eq!(Config::default().ai.api_key, "goo-key");
        clear_key_vars();
    }

    #[test]
    #[serial]
    fn test_no_key_anywhere_leaves_it_empty() {
        clear_key_vars();
        let config = Config::default();
        assert!(config.ai.api_key.is_empty());
        assert_eq!(config.ai.model, DEFAULT_MODEL);
        assert_eq!(config.ai.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_environment_key_overrides_file_key() {
        clear_key_vars();
        let dir = tempfile::tempdir().unwrap();
        let old_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", dir.path());

        let mut on_disk = Config::default();
        on_disk.ai.api_key = "from-file".to_string();
        on_disk.save().unwrap();

        std::env::set_var("GEMINI_API_KEY", "from-env");
        let loaded = Config::load_or_default().unwrap();
        assert_eq!(loaded.ai.api_key, "from-env");

        clear_key_vars();
        match old_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_config_file_round_trips() {
        clear_key_vars();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.ai.model = "gemini-exp".to_string();
        config.ai.timeout_secs = 5;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.ai.model, "gemini-exp");
        assert_eq!(loaded.ai.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.ai.timeout_secs, 5);
    }
}
