use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub rewrite: RewriteConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        // Server validations
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        // Upstream validations
        if url::Url::parse(&self.upstream.base_url).is_err() {
            return Err(format!(
                "upstream.base_url is not a valid URL: {}",
                self.upstream.base_url
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err("upstream.timeout_ms must be > 0".into());
        }
        // Pagination validations
        if self.pagination.default_size == 0 {
            return Err("pagination.default_size must be > 0".into());
        }
        if self.pagination.max_size == 0 {
            return Err("pagination.max_size must be > 0".into());
        }
        if self.pagination.default_size > self.pagination.max_size {
            return Err("pagination.default_size must be <= pagination.max_size".into());
        }
        // Logging validation
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream.timeout_ms)
    }

    /// Configured rewrite override, if any; trailing slashes trimmed.
    ///
    /// An empty value means "no override" and base-address resolution
    /// falls through to forwarded headers or the request's own origin.
    pub fn rewrite_base(&self) -> Option<String> {
        let trimmed = self.rewrite.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base address of the proxied catalog.
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// Per-request timeout for upstream page fetches.
    #[serde(default = "default_upstream_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            timeout_ms: default_upstream_timeout_ms(),
        }
    }
}

fn default_upstream_base_url() -> String {
    holonet_client::DEFAULT_BASE_URL.into()
}
fn default_upstream_timeout_ms() -> u64 {
    10_000
}

/// Optional override for the outbound base address used in URL rewriting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RewriteConfig {
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}
fn default_max_page_size() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        match path {
            Some(p) => {
                let pathbuf = PathBuf::from(p);
                if pathbuf.exists() {
                    builder = builder.add_source(File::from(pathbuf));
                }
            }
            None => {
                // Try default root-level file
                let default_path = PathBuf::from("holonet.toml");
                if default_path.exists() {
                    builder = builder.add_source(File::from(default_path));
                }
            }
        }
        // Environment variable overrides, e.g., HOLONET__SERVER__PORT=9090
        builder = builder.add_source(
            Environment::with_prefix("HOLONET")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}
