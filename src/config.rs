use crate::error::NotifierError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_TERMINAL_APP: &str = "Terminal";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub sound: Option<String>,
    pub timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub terminal_app: Option<String>,
    pub macos: Option<MacosConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MacosConfig {
    pub app_bundle_id: Option<String>,
}

impl Config {
    pub fn template() -> &'static str {
        r#"# claude-notifier config
# sound = "Glass"
# timeout_secs = 60
# idle_timeout_secs = 5
# terminal_app = "Terminal"

[macos]
# app_bundle_id = "com.apple.Terminal"
"#
    }

    /// Reads `path`, or returns defaults when no file exists there.
    pub fn load(path: &Path) -> Result<Self, NotifierError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| NotifierError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("claude-notifier/config.toml");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/claude-notifier/config.toml");
    }
    PathBuf::from("claude-notifier.toml")
}

/// Values the controller runs with after flags, file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sound: Option<String>,
    pub timeout: Duration,
    pub idle_timeout: Duration,
    pub terminal_app: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            terminal_app: DEFAULT_TERMINAL_APP.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sound: Option<String>,
    pub timeout_secs: Option<u64>,
    pub terminal_app: Option<String>,
}

impl Settings {
    /// Flag beats config file beats `TERM_PROGRAM` beats built-in default.
    pub fn resolve(overrides: Overrides, config: &Config, term_program: Option<&str>) -> Self {
        let timeout_secs = overrides
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let idle_secs = config.idle_timeout_secs.unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS);
        let terminal_app = overrides
            .terminal_app
            .or_else(|| config.terminal_app.clone())
            .or_else(|| crate::window::terminal_app_name(term_program).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_TERMINAL_APP.to_string());

        Self {
            sound: overrides.sound.or_else(|| config.sound.clone()),
            timeout: Duration::from_secs(timeout_secs),
            idle_timeout: Duration::from_secs(idle_secs),
            terminal_app,
        }
    }
}
