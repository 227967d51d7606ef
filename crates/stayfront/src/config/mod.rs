use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the site backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEnvironment {
    Development,
    Test,
    Production,
}

impl SiteEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the site backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: SiteEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub images: ImagesConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            SiteEnvironment::parse(&env::var("SITE_ENV").unwrap_or_else(|_| "development".to_string()));

        let host = env::var("SITE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SITE_PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("SITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let images = ImagesConfig::from_hosts(
            &env::var("SITE_IMAGE_HOSTS").unwrap_or_else(|_| DEFAULT_IMAGE_HOSTS.to_string()),
        );

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            images,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Remote hosts the site is willing to render images from.
///
/// The allow-list mirrors the image CDN configuration the frontend ships
/// with: the auth provider's avatar host and the storage bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesConfig {
    pub remote_hosts: Vec<String>,
}

const DEFAULT_IMAGE_HOSTS: &str = "img.clerk.com,wjuuctjigtwplaxnagyg.supabase.co";

impl ImagesConfig {
    fn from_hosts(raw: &str) -> Self {
        let remote_hosts = raw
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(str::to_string)
            .collect();
        Self { remote_hosts }
    }

    pub fn permits(&self, host: &str) -> bool {
        self.remote_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self::from_hosts(DEFAULT_IMAGE_HOSTS)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "SITE_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "SITE_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("SITE_ENV");
        env::remove_var("SITE_HOST");
        env::remove_var("SITE_PORT");
        env::remove_var("SITE_LOG_LEVEL");
        env::remove_var("SITE_IMAGE_HOSTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, SiteEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.images.permits("img.clerk.com"));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 4000));
    }

    #[test]
    fn image_hosts_override_replaces_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_IMAGE_HOSTS", "cdn.example.com, img.example.com");
        let config = AppConfig::load().expect("config loads");
        assert!(config.images.permits("cdn.example.com"));
        assert!(config.images.permits("IMG.EXAMPLE.COM"));
        assert!(!config.images.permits("img.clerk.com"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_PORT", "forms");
        let error = AppConfig::load().expect_err("port should fail to parse");
        assert!(matches!(error, ConfigError::InvalidPort));
    }
}
