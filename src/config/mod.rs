use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub routes: RouteConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Where the navigable route table comes from (`DYNAMIC_LOAD_WAY`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicLoadWay {
    /// Fetch the caller's permitted menus from `/v1/menus`
    Backend,
    /// Use the compiled-in route table filtered by the session's roles
    Static,
}

impl DynamicLoadWay {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "backend" => Some(DynamicLoadWay::Backend),
            "static" | "frontend" => Some(DynamicLoadWay::Static),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Mock server used for `custom_dev` requests while in development
    pub dev_base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub dynamic_load_way: DynamicLoadWay,
    /// Paths the router guard lets through without a token
    pub white_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub login_path: String,
    pub config_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    fn with_env_overrides(mut self) -> Self {
        // API overrides
        if let Ok(v) = env::var("ADMIN_API_BASE_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = env::var("ADMIN_DEV_BASE_URL") {
            self.api.dev_base_url = Some(v).filter(|s| !s.is_empty());
        }
        if let Ok(v) = env::var("ADMIN_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().unwrap_or(self.api.request_timeout_secs);
        }
        if let Ok(v) = env::var("ADMIN_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Route overrides
        if let Ok(v) = env::var("DYNAMIC_LOAD_WAY") {
            match DynamicLoadWay::parse(&v) {
                Some(way) => self.routes.dynamic_load_way = way,
                None => tracing::warn!("Ignoring unknown DYNAMIC_LOAD_WAY value '{}'", v),
            }
        }
        if let Ok(v) = env::var("ADMIN_ROUTE_WHITE_LIST") {
            self.routes.white_list = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Session overrides
        if let Ok(v) = env::var("ADMIN_LOGIN_PATH") {
            self.session.login_path = v;
        }
        if let Ok(v) = env::var("ADMIN_CONSOLE_CONFIG_DIR") {
            self.session.config_dir = Some(PathBuf::from(v));
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                dev_base_url: Some("http://localhost:6678".to_string()),
                request_timeout_secs: 60,
                enable_request_logging: true,
            },
            routes: RouteConfig {
                dynamic_load_way: DynamicLoadWay::Backend,
                white_list: default_white_list(),
            },
            session: SessionConfig {
                login_path: "/login".to_string(),
                config_dir: None,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: "https://staging.example.com/api".to_string(),
                dev_base_url: None,
                request_timeout_secs: 30,
                enable_request_logging: true,
            },
            routes: RouteConfig {
                dynamic_load_way: DynamicLoadWay::Backend,
                white_list: default_white_list(),
            },
            session: SessionConfig {
                login_path: "/login".to_string(),
                config_dir: None,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: "https://admin.example.com/api".to_string(),
                dev_base_url: None,
                request_timeout_secs: 15,
                enable_request_logging: false,
            },
            routes: RouteConfig {
                dynamic_load_way: DynamicLoadWay::Backend,
                white_list: default_white_list(),
            },
            session: SessionConfig {
                login_path: "/login".to_string(),
                config_dir: None,
            },
        }
    }
}

fn default_white_list() -> Vec<String> {
    ["/login", "/error", "/401", "/404", "/403"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert!(config.is_development());
        assert!(config.api.dev_base_url.is_some());
        assert_eq!(config.routes.dynamic_load_way, DynamicLoadWay::Backend);
        assert_eq!(config.session.login_path, "/login");
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.is_development());
        assert!(config.api.dev_base_url.is_none());
        assert!(!config.api.enable_request_logging);
    }

    #[test]
    fn test_dynamic_load_way_parse() {
        assert_eq!(DynamicLoadWay::parse("BACKEND"), Some(DynamicLoadWay::Backend));
        assert_eq!(DynamicLoadWay::parse(" static "), Some(DynamicLoadWay::Static));
        assert_eq!(DynamicLoadWay::parse("frontend"), Some(DynamicLoadWay::Static));
        assert_eq!(DynamicLoadWay::parse("somewhere"), None);
    }
}
