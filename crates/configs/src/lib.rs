use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Where the three collection documents live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_customers_file")]
    pub customers_file: String,
    #[serde(default = "default_vehicles_file")]
    pub vehicles_file: String,
    #[serde(default = "default_employees_file")]
    pub employees_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            customers_file: default_customers_file(),
            vehicles_file: default_vehicles_file(),
            employees_file: default_employees_file(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_customers_file() -> String { "customers.json".into() }
fn default_vehicles_file() -> String { "vehicles.json".into() }
fn default_employees_file() -> String { "employees.json".into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Load `path`; only a missing file falls back to [`from_env`].
pub fn load_or_env(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_not_found(&e) => Ok(from_env()),
        Err(e) => Err(e.context(format!("cannot load config from {path}"))),
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Build a config purely from environment variables, used when no TOML file is present.
pub fn from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = std::env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    if let Ok(dir) = std::env::var("DATA_DIR") {
        cfg.storage.data_dir = PathBuf::from(dir);
    }
    cfg
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to env vars when
    /// the file does not exist, then validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_env(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("storage.customers_file", &self.customers_file),
            ("storage.vehicles_file", &self.vehicles_file),
            ("storage.employees_file", &self.employees_file),
        ] {
            if name.trim().is_empty() {
                return Err(anyhow!("{key} must not be empty"));
            }
        }
        Ok(())
    }

    pub fn customers_path(&self) -> PathBuf { self.data_dir.join(&self.customers_file) }
    pub fn vehicles_path(&self) -> PathBuf { self.data_dir.join(&self.vehicles_file) }
    pub fn employees_path(&self) -> PathBuf { self.data_dir.join(&self.employees_file) }
}
