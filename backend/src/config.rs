use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical origin used in sitemap and hreflang URLs.
    pub base_url: String,
    /// Deployment environment; gates the Secure cookie attribute.
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Fixed-window rate limit for the contact endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    /// Window length in seconds (default: 900)
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub window_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::load_from(None)
    }

    /// Load from an explicit file path (CLI `--config`), falling back to the
    /// standard search locations.
    pub fn load_from(path: Option<&str>) -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let mut config = if let Some(config_path) = path.map(str::to_string).or_else(Self::find_config_file)
        {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_SITE_BASE_URL: Canonical site origin (e.g., "https://metfab.example")
    /// - APP_SITE_ENVIRONMENT: "production" or "development"
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,metfab_site=debug")
    /// - APP_RATE_LIMIT_MAX_REQUESTS: Contact form requests per window
    /// - APP_RATE_LIMIT_WINDOW_SECS: Window length (accepts "900", "15m")
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(base_url) = std::env::var("APP_SITE_BASE_URL") {
            self.site.base_url = base_url;
            tracing::info!("Override site.base_url from env: {}", self.site.base_url);
        }

        if let Ok(environment) = std::env::var("APP_SITE_ENVIRONMENT") {
            match environment.to_lowercase().as_str() {
                "production" | "prod" => self.site.environment = Environment::Production,
                "development" | "dev" => self.site.environment = Environment::Development,
                other => tracing::warn!(
                    "Invalid APP_SITE_ENVIRONMENT '{}' (keep {:?})",
                    other,
                    self.site.environment
                ),
            }
            tracing::info!("site.environment: {:?}", self.site.environment);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(max_requests) = std::env::var("APP_RATE_LIMIT_MAX_REQUESTS")
            && let Ok(val) = max_requests.parse()
        {
            self.rate_limit.max_requests = val;
            tracing::info!(
                "Override rate_limit.max_requests from env: {}",
                self.rate_limit.max_requests
            );
        }

        if let Ok(window) = std::env::var("APP_RATE_LIMIT_WINDOW_SECS") {
            match parse_duration_to_secs(&window) {
                Ok(val) => {
                    self.rate_limit.window_secs = val;
                    tracing::info!(
                        "Override rate_limit.window_secs from env: {}",
                        self.rate_limit.window_secs
                    );
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_RATE_LIMIT_WINDOW_SECS '{}': {} (keep {})",
                    window,
                    e,
                    self.rate_limit.window_secs
                ),
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        // Validate server port
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        // Validate site base URL
        if self.site.base_url.is_empty() {
            anyhow::bail!("Site base_url cannot be empty");
        }
        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            anyhow::bail!("Site base_url must start with http:// or https://");
        }

        // Validate rate limiter
        if self.rate_limit.max_requests == 0 {
            anyhow::bail!("rate_limit.max_requests must be > 0");
        }
        if self.rate_limit.window_secs == 0 {
            anyhow::bail!("rate_limit.window_secs must be > 0");
        }

        if self.site.environment.is_production() && self.site.base_url.starts_with("http://") {
            tracing::warn!("⚠️  Production deployment with a plain-HTTP base_url");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            environment: Environment::Development,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,metfab_site=debug".to_string(),
            file: Some("logs/metfab-site.log".to_string()),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // Contract: 5 requests per 15-minute window per client IP
        Self { max_requests: 5, window_secs: 900 }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: Vec::new() }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Accept plain numbers (treated as seconds)
    if let Ok(val) = input.parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(n),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(n * 60),
        "h" | "hr" | "hour" | "hours" => Ok(n * 60 * 60),
        "d" | "day" | "days" => Ok(n * 60 * 60 * 24),
        _ => Err(format!("unsupported unit: {}", unit)),
    }
}

// Custom serde deserializer to support numeric or human-friendly string values
fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '900s' or '15m'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(&v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}
