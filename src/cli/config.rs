use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiClient, HttpTransport};
use crate::config::AppConfig;
use crate::router::route_source;
use crate::session::{FileTokenStore, LogNavigator, RouteGuard, SessionCoordinator, TokenStore};

pub fn get_config_dir(config: &AppConfig) -> anyhow::Result<PathBuf> {
    let config_dir = if let Some(custom_dir) = &config.session.config_dir {
        custom_dir.clone()
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("admin-console")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// Everything a command needs: the session plus its guard
pub struct CliContext {
    pub session: Arc<SessionCoordinator>,
    pub guard: RouteGuard,
}

impl CliContext {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let config_dir = get_config_dir(config)?;
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::open(&config_dir)?);

        let transport = HttpTransport::new(config, tokens.clone())?;
        let client = ApiClient::new(Arc::new(transport));
        let routes = route_source(config.routes.dynamic_load_way, client.clone());

        let session = Arc::new(SessionCoordinator::new(
            client,
            routes,
            tokens,
            Arc::new(LogNavigator),
            config.session.login_path.clone(),
        ));
        let guard = RouteGuard::new(session.clone(), config.routes.white_list.clone());

        Ok(Self { session, guard })
    }
}
