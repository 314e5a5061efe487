//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment variables
//! 3. `roster.toml` in the working directory, or an explicit `--config` file
//! 4. `~/.config/roster/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants;
use crate::env::Env;
use crate::fetch::{CachePolicy, FetchOptions};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid listen address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Parse `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

/// Remote user API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub users_url: String,
    pub cache: CachePolicy,
    /// Request timeout in seconds. Unset means no upper bound.
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            users_url: constants::DEFAULT_USERS_URL.to_string(),
            cache: CachePolicy::default(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Fetch options derived from this section.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::with_cache(self.cache)
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory lookup when given and,
    /// unlike the implicit files, must exist.
    pub fn load(explicit: Option<&Path>, work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit file or working-directory config
        match explicit {
            Some(path) => {
                let local = Self::load_file(path)?;
                config.merge(local);
            }
            None => {
                if let Some(dir) = work_dir {
                    let local_path = dir.join(constants::CONFIG_FILENAME);
                    if local_path.exists() {
                        let local = Self::load_file(&local_path)?;
                        config.merge(local);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_server = ServerConfig::default();
        if other.server.host != default_server.host {
            self.server.host = other.server.host;
        }
        if other.server.port != default_server.port {
            self.server.port = other.server.port;
        }

        let default_source = SourceConfig::default();
        if other.source.users_url != default_source.users_url {
            self.source.users_url = other.source.users_url;
        }
        if other.source.cache != default_source.cache {
            self.source.cache = other.source.cache;
        }
        if other.source.timeout_secs.is_some() {
            self.source.timeout_secs = other.source.timeout_secs;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_HOST) {
            self.server.host = val;
        }
        if let Ok(val) = env.var(constants::ENV_PORT) {
            match val.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_PORT),
            }
        }
        if let Ok(val) = env.var(constants::ENV_USERS_URL) {
            self.source.users_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_CACHE) {
            match val.parse::<CachePolicy>() {
                Ok(policy) => self.source.cache = policy,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_CACHE),
            }
        }
        if let Ok(val) = env.var(constants::ENV_TIMEOUT_SECS) {
            match val.parse::<u64>() {
                Ok(0) => self.source.timeout_secs = None,
                Ok(secs) => self.source.timeout_secs = Some(secs),
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_TIMEOUT_SECS),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.source.users_url, constants::DEFAULT_USERS_URL);
        assert_eq!(config.source.cache, CachePolicy::Fresh);
        assert_eq!(config.source.timeout_secs, None);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080

[source]
users_url = "http://localhost:4000/users"
cache = "allow-stale"
timeout_secs = 10
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.source.users_url, "http://localhost:4000/users");
        assert_eq!(config.source.cache, CachePolicy::AllowStale);
        assert_eq!(config.source.timeout_secs, Some(10));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.server.host = "0.0.0.0".to_string();
        other.server.port = 8080;
        other.source.users_url = "http://mirror/users".to_string();
        other.source.cache = CachePolicy::AllowStale;
        other.source.timeout_secs = Some(3);

        base.merge(other.clone());
        assert_eq!(base, other);
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.server.port = 8080;
        base.source.cache = CachePolicy::AllowStale;
        base.source.timeout_secs = Some(7);

        base.merge(Config::default());

        assert_eq!(base.server.port, 8080);
        assert_eq!(base.source.cache, CachePolicy::AllowStale);
        assert_eq!(base.source.timeout_secs, Some(7));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_unknown_cache_policy_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "[source]\ncache = \"forever\"\n").unwrap();

        assert!(Config::load_file(&path).is_err());
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("roster.toml"),
            "[source]\nusers_url = \"http://localhost:4000/users\"\n",
        )
        .unwrap();

        let config = Config::load(None, Some(dir.path()), &empty_env()).unwrap();
        assert_eq!(config.source.users_url, "http://localhost:4000/users");
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let result = Config::load(Some(&missing), None, &empty_env());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn explicit_path_replaces_work_dir_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("roster.toml"), "[server]\nport = 1111\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[server]\nport = 2222\n").unwrap();

        let config = Config::load(Some(&explicit), Some(dir.path()), &empty_env()).unwrap();
        assert_eq!(config.server.port, 2222);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("roster.toml"), "[server]\nport = 1111\n").unwrap();
        let env = Env::mock([
            ("ROSTER_PORT", "4444"),
            ("ROSTER_HOST", "0.0.0.0"),
            ("ROSTER_USERS_URL", "http://env/users"),
            ("ROSTER_CACHE", "allow-stale"),
            ("ROSTER_TIMEOUT_SECS", "15"),
        ]);

        let config = Config::load(None, Some(dir.path()), &env).unwrap();
        assert_eq!(config.server.port, 4444);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.source.users_url, "http://env/users");
        assert_eq!(config.source.cache, CachePolicy::AllowStale);
        assert_eq!(config.source.timeout_secs, Some(15));
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([
            ("ROSTER_PORT", "not-a-port"),
            ("ROSTER_CACHE", "forever"),
            ("ROSTER_TIMEOUT_SECS", "soon"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_timeout_clears_timeout() {
        let env = Env::mock([("ROSTER_TIMEOUT_SECS", "0")]);
        let mut config = Config::default();
        config.source.timeout_secs = Some(30);
        config.apply_env_vars(&env);
        assert_eq!(config.source.timeout_secs, None);
    }

    #[test]
    fn socket_addr_parses_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(matches!(
            bad.socket_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn fetch_options_follow_cache_policy() {
        let mut source = SourceConfig::default();
        source.cache = CachePolicy::AllowStale;
        assert_eq!(source.fetch_options().cache, CachePolicy::AllowStale);
    }
}
