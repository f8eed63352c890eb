use std::env;

pub const DEFAULT_UPSTREAM_URL: &str = "https://www.kuaishou.com/?isHome=1";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP port to listen on
    pub port: u16,
    pub upstream_url: String,
    /// Lifetime of a cached hot list in seconds
    pub cache_ttl_secs: u64,
    /// Upstream request timeout; the client default applies when unset
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 6688,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            cache_ttl_secs: 3600,
            request_timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            upstream_url: env::var("KUAISHOU_URL").unwrap_or(defaults.upstream_url),
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cache_ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }
        if self.upstream_url.trim().is_empty() {
            return Err("Upstream URL must not be empty".to_string());
        }
        Ok(())
    }
}
