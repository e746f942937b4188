use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Frontend bundle served for every non-API route
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: String,
}

/// Date range used when a request does not carry one
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub start_date: String,
    pub end_date: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000
static_dir = "crates/frontend/dist"

[logging]
level = "info"
log_dir = "logs"

[data]
start_date = "01/01/2025"
end_date = "31/01/2025"
"#;

/// `config.toml` next to the executable, if there is one
pub fn config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let path = exe_path.parent()?.join("config.toml");
    path.exists().then_some(path)
}

/// Load configuration
///
/// Search order:
/// 1. `config.toml` next to the executable
/// 2. the embedded default
///
/// Runs before tracing is up, so the caller reports which one was used.
pub fn load_config() -> anyhow::Result<Config> {
    match config_path() {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            parse_config(&contents)
        }
        None => parse_config(DEFAULT_CONFIG),
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    contracts::shared::date_input::parse_range(&config.data.start_date, &config.data.end_date)?;
    Ok(config)
}

/// Resolve a configured directory; relative paths are taken next to the executable
pub fn resolve_dir(dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(dir)
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
