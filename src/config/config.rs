use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Version number reported instead of the resolved one
    pub version: Option<String>,
    /// tracing filter directive, e.g. `debug` or `verinfo=trace`
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub version: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn create(cli_version: Option<String>) -> Result<Self, ConfigError> {
        // 1) Load config file if present
        let file_cfg = load_file_config(&config_file_path())?;

        // 2) Version precedence: CLI > env > config file > None (resolved from build metadata)
        let version = non_empty(cli_version)
            .or_else(|| non_empty(env::var("VERINFO_VERSION").ok()))
            .or_else(|| non_empty(file_cfg.version));

        // 3) Log level from config file; VERINFO_LOG is handled by the subscriber
        let log_level = non_empty(file_cfg.log_level);

        Ok(Config { version, log_level })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

pub fn config_file_path() -> PathBuf {
    // Allow tests/users to override config dir via VERINFO_CONFIG_DIR; else use platform default
    let cfg_dir = if let Ok(p) = env::var("VERINFO_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("verinfo").join("config.toml")
}

/// Reads `path`; a missing file yields the default config.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let s = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str::<FileConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
