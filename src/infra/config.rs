use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::clients::quran::DEFAULT_BASE_URL;

pub const CONFIG_PATH_ENV: &str = "QURAN_MCP_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// MCP over stdin/stdout.
    Stdio,
    /// MCP over HTTP with a Server-Sent Events stream per session.
    Sse,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 2_000,
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            host: "0.0.0.0".into(),
            port: 8080,
            api: ApiConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("PORT cannot be 0")]
    ZeroPort,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    server: FileServer,
    #[serde(default)]
    api: FileApi,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileServer {
    transport: Option<Transport>,
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileApi {
    base_url: Option<String>,
    connect_timeout_ms: Option<u64>,
    timeout_ms: Option<u64>,
}

impl Config {
    /// Defaults, then the TOML file named by `QURAN_MCP_CONFIG` (if any), then
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            cfg.apply_file(Path::new(&path))?;
        }
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults plus environment overrides only.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env();
        cfg
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport == Transport::Sse && self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        Ok(())
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(t) = file.server.transport {
            self.transport = t;
        }
        if let Some(host) = file.server.host {
            self.host = host;
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(base) = file.api.base_url {
            self.api.base_url = base;
        }
        if let Some(ms) = file.api.connect_timeout_ms {
            self.api.connect_timeout_ms = ms;
        }
        if file.api.timeout_ms.is_some() {
            self.api.timeout_ms = file.api.timeout_ms;
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        let production = std::env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let use_sse = std::env::var("USE_SSE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if production || use_sse {
            self.transport = Transport::Sse;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse::<u16>().ok()) {
            self.port = port;
        }
        if let Ok(host) = std::env::var("HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(base) = std::env::var("QURAN_API_BASE_URL") {
            if !base.trim().is_empty() {
                self.api.base_url = base;
            }
        }
        if let Some(ms) = std::env::var("QURAN_API_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.api.timeout_ms = Some(ms);
        }
    }
}
