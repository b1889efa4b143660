pub mod error;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use error::{ConfigError, Result};

/// Name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "seekchat.toml";

/// Environment variable naming the file that holds the API key
pub const API_KEY_FILE_ENV: &str = "API_KEY_FILE";
pub const BASE_URL_ENV: &str = "SEEKCHAT_BASE_URL";
pub const BETA_URL_ENV: &str = "SEEKCHAT_BETA_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_BETA_URL: &str = "https://api.deepseek.com/beta";
pub const DEFAULT_CHAT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_REASONER_MODEL: &str = "deepseek-reasoner";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key read from the secret file
    pub api_key: String,

    /// Standard endpoint base URL
    pub base_url: String,

    /// Beta endpoint base URL, used for fill-in-the-middle completion
    pub beta_url: String,

    /// Model for ordinary chat rounds
    pub chat_model: String,

    /// Model that returns a reasoning trace alongside its answer
    pub reasoner_model: String,
}

/// Contents of `seekchat.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub beta_url: Option<String>,
    pub chat_model: Option<String>,
    pub reasoner_model: Option<String>,
    pub api_key_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Read and parse a config file. A relative `api_key_file` is resolved
    /// against the directory holding the config file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        let mut file: ConfigFile = toml::from_str(&data)?;

        if let Some(key_file) = &file.api_key_file {
            if key_file.is_relative() {
                let config_dir = path.parent().unwrap_or(Path::new("."));
                file.api_key_file = Some(config_dir.join(key_file));
            }
        }

        Ok(file)
    }
}

impl Config {
    /// Configuration with default endpoints and models
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            beta_url: DEFAULT_BETA_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            reasoner_model: DEFAULT_REASONER_MODEL.to_string(),
        }
    }

    /// Load configuration from `seekchat.toml` (if any, searched upward from
    /// `config_dir`) and the process environment
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self> {
        let file = match find_config_file(config_dir.as_ref())? {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                Some(ConfigFile::read(&path)?)
            }
            None => {
                debug!(
                    "No {} found from {}, using defaults",
                    CONFIG_FILE_NAME,
                    config_dir.as_ref().display()
                );
                None
            }
        };

        Self::from_sources(file.unwrap_or_default(), |name| env::var(name).ok())
    }

    /// Merge a parsed config file with environment lookups. Environment wins.
    pub fn from_sources(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let key_path = lookup(API_KEY_FILE_ENV)
            .map(PathBuf::from)
            .or(file.api_key_file)
            .ok_or_else(|| ConfigError::MissingEnv(API_KEY_FILE_ENV.to_string()))?;

        let config = Config {
            api_key: load_api_key(&key_path)?,
            base_url: normalize_url(
                lookup(BASE_URL_ENV)
                    .or(file.base_url)
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ),
            beta_url: normalize_url(
                lookup(BETA_URL_ENV)
                    .or(file.beta_url)
                    .unwrap_or_else(|| DEFAULT_BETA_URL.to_string()),
            ),
            chat_model: file
                .chat_model
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            reasoner_model: file
                .reasoner_model
                .unwrap_or_else(|| DEFAULT_REASONER_MODEL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid("'base_url' must not be empty".into()));
        }
        if self.beta_url.is_empty() {
            return Err(ConfigError::Invalid("'beta_url' must not be empty".into()));
        }
        if self.chat_model.is_empty() {
            return Err(ConfigError::Invalid("'chat_model' must not be empty".into()));
        }
        if self.reasoner_model.is_empty() {
            return Err(ConfigError::Invalid(
                "'reasoner_model' must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Read the API key from a secret file, trimming surrounding whitespace
pub fn load_api_key(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SecretUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyApiKey(path.to_path_buf()));
    }

    Ok(key.to_string())
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Find seekchat.toml by searching upward from the given path
fn find_config_file(start_path: &Path) -> Result<Option<PathBuf>> {
    let start_dir = if start_path.is_file() {
        start_path.parent().unwrap_or(Path::new("."))
    } else {
        start_path
    };

    let mut current_dir = start_dir.canonicalize().map_err(|e| {
        ConfigError::Invalid(format!(
            "Failed to resolve path {}: {}",
            start_dir.display(),
            e
        ))
    })?;

    loop {
        let config_path = current_dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Ok(Some(config_path));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_with(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn write_key(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("api_key");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_api_key_trims() {
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, "  sk-secret\n");

        assert_eq!(load_api_key(&path).unwrap(), "sk-secret");
    }

    #[test]
    fn test_load_api_key_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, " \n\t");

        let err = load_api_key(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyApiKey(_)));
        assert!(err.to_string().contains("API key is not defined"));
    }

    #[test]
    fn test_load_api_key_unreadable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = load_api_key(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::SecretUnreadable { .. }));
    }

    #[test]
    fn test_missing_key_file_env() {
        let err = Config::from_sources(ConfigFile::default(), env_with(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ref name) if name == API_KEY_FILE_ENV));
    }

    #[test]
    fn test_defaults_from_env_only() {
        let dir = TempDir::new().unwrap();
        let key = write_key(&dir, "sk-test");
        let env = env_with(&[(API_KEY_FILE_ENV, key.display().to_string())]);

        let config = Config::from_sources(ConfigFile::default(), env).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.beta_url, DEFAULT_BETA_URL);
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.reasoner_model, DEFAULT_REASONER_MODEL);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let key = write_key(&dir, "sk-test");
        let file = ConfigFile {
            base_url: Some("https://file.example".into()),
            beta_url: Some("https://file.example/beta".into()),
            chat_model: Some("local-chat".into()),
            ..Default::default()
        };
        let env = env_with(&[
            (API_KEY_FILE_ENV, key.display().to_string()),
            (BASE_URL_ENV, "http://localhost:8080/v1/".into()),
            (BETA_URL_ENV, "   ".into()),
        ]);

        let config = Config::from_sources(file, env).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        // Blank env values fall through to the file
        assert_eq!(config.beta_url, "https://file.example/beta");
        assert_eq!(config.chat_model, "local-chat");
        assert_eq!(config.reasoner_model, DEFAULT_REASONER_MODEL);
    }

    #[test]
    fn test_load_from_toml_in_parent() {
        let dir = TempDir::new().unwrap();
        write_key(&dir, "sk-from-toml");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "api_key_file = \"api_key\"\nreasoner_model = \"r1\"\n",
        )
        .unwrap();

        let sub_dir = dir.path().join("nested");
        fs::create_dir(&sub_dir).unwrap();

        let found = find_config_file(&sub_dir).unwrap().unwrap();
        assert_eq!(
            found.canonicalize().unwrap(),
            dir.path().join(CONFIG_FILE_NAME).canonicalize().unwrap()
        );

        let file = ConfigFile::read(&found).unwrap();
        let config = Config::from_sources(file, env_with(&[])).unwrap();
        assert_eq!(config.api_key, "sk-from-toml");
        assert_eq!(config.reasoner_model, "r1");
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "modle = \"typo\"\n").unwrap();

        let err = ConfigFile::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_empty_model_rejected() {
        let dir = TempDir::new().unwrap();
        let key = write_key(&dir, "sk-test");
        let file = ConfigFile {
            chat_model: Some(String::new()),
            ..Default::default()
        };
        let env = env_with(&[(API_KEY_FILE_ENV, key.display().to_string())]);

        let err = Config::from_sources(file, env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
