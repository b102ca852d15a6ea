//! Runtime configuration.
//!
//! Settings are resolved in three layers, later layers winning: built-in
//! defaults, an optional TOML file (`hearth.toml`, or the path named by
//! `HEARTH_CONFIG`), and `HEARTH_*` environment variables.

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "hearth.toml";

/// Fully-resolved daemon configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Node identity.
    pub node: NodeConfig,
    /// HTTP listener.
    pub server: ServerConfig,
    /// Value-store database.
    pub database: DatabaseConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// Identity the node reports in logs and registration events.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Human-readable node name.
    pub name: String,
    /// Device model tag.
    pub model: String,
}

/// Where the HTTP adapter listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Where accepted parameter values are persisted.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx`-style `SQLite` URL.
    pub url: String,
}

/// Log filtering.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Resolve the configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed, or when the resolved settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env_var("HEARTH_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(name) = env_var("HEARTH_NODE_NAME") {
            self.node.name = name;
        }
        if let Some(bind) = env_var("HEARTH_BIND") {
            if let Some((host, port)) = parse_bind(&bind) {
                self.server.host = host;
                self.server.port = port;
            }
        }
        if let Some(url) = env_var("HEARTH_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = env_var("HEARTH_LOG").or_else(|| env_var("RUST_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.node.name.is_empty() {
            return Err(ConfigError::Validation("node name must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server port must be non-zero"));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation("database url must not be empty"));
        }
        Ok(())
    }

    /// The `host:port` pair the HTTP listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The value-store database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Split a `host:port` string, tolerating IPv6 hosts with colons.
fn parse_bind(addr: &str) -> Option<(String, u16)> {
    let (host, port) = addr.rsplit_once(':')?;
    let port: u16 = port.parse().ok()?;
    Some((host.to_string(), port))
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: "Hearth Workshop Light".to_string(),
            model: "Lightbulb".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hearth.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hearthd=info,hearth=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
