use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::gateway::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Environment variables consulted, in order, when no key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub catalog: CatalogConfig,
    pub ai: AiConfig,
    pub speech: SpeechConfig,
    /// Where this configuration came from. Reported once logging is up.
    #[serde(skip)]
    pub source: ConfigSource,
}

/// Outcome of reading the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built in code, no file consulted.
    #[default]
    Defaults,
    File(PathBuf),
    /// No file at this path; defaults in use.
    Missing(PathBuf),
    /// The file could not be parsed; defaults in use.
    Invalid { path: PathBuf, error: String },
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in vocabulary.
    pub path: Option<PathBuf>,
}

/// Gemini settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Explicit TTS executable; probed on PATH when unset.
    pub command: Option<String>,
    pub voice: Option<String>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            voice: None,
        }
    }
}

impl AiConfig {
    /// Configured key, else the first non-empty key from the environment.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(self.api_key.as_deref(), |name| std::env::var(name).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn resolve_api_key(
    configured: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let non_empty = |key: String| {
        let key = key.trim().to_string();
        (!key.is_empty()).then_some(key)
    };
    configured
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| API_KEY_ENV_VARS.iter().find_map(|name| env(name).and_then(non_empty)))
}

impl AppConfig {
    /// Load configuration from `~/.config/hanzi-hero/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read `config_path`, falling back to defaults.
    ///
    /// Nothing is logged here: the log sink depends on the loaded data
    /// directory. Call [`AppConfig::log_source`] after logging starts.
    pub fn load_from(config_path: &Path) -> Self {
        let path = config_path.to_path_buf();
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => Self {
                    source: ConfigSource::File(path),
                    ..config
                },
                Err(e) => Self {
                    source: ConfigSource::Invalid {
                        path,
                        error: e.to_string(),
                    },
                    ..Self::default()
                },
            },
            Err(_) => Self {
                source: ConfigSource::Missing(path),
                ..Self::default()
            },
        }
    }

    /// Report where the configuration came from.
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                log::debug!("No config file at {}, using defaults", path.display())
            }
            ConfigSource::Invalid { path, error } => {
                log::warn!("Failed to parse config at {}: {error}, using defaults", path.display())
            }
            ConfigSource::Defaults => log::debug!("Using built-in default config"),
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("hanzi-hero"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("hanzi-hero").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
