#![allow(dead_code)]

use std::sync::Arc;

use admin_console::api::{ApiClient, HttpTransport};
use admin_console::config::{AppConfig, DynamicLoadWay};
use admin_console::router::route_source;
use admin_console::session::{MemoryTokenStore, RecordingNavigator, RouteGuard, SessionCoordinator};
use anyhow::Result;
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

/// A mock admin backend plus a session wired against it
pub struct TestBackend {
    pub server: MockServer,
    pub config: AppConfig,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: ApiClient,
    pub session: Arc<SessionCoordinator>,
}

impl TestBackend {
    pub async fn start(way: DynamicLoadWay, token: Option<&str>) -> Result<Self> {
        let server = MockServer::start().await;

        let mut config = AppConfig::development();
        config.api.base_url = server.uri();
        config.api.dev_base_url = None;
        config.routes.dynamic_load_way = way;

        let tokens = Arc::new(match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        });
        let navigator = Arc::new(RecordingNavigator::new());

        let transport = HttpTransport::new(&config, tokens.clone())?;
        let client = ApiClient::new(Arc::new(transport));
        let session = Arc::new(SessionCoordinator::new(
            client.clone(),
            route_source(way, client.clone()),
            tokens.clone(),
            navigator.clone(),
            config.session.login_path.clone(),
        ));

        Ok(Self {
            server,
            config,
            tokens,
            navigator,
            client,
            session,
        })
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone(), self.config.routes.white_list.clone())
    }

    /// Authorization header of every request the backend received, in order
    pub async fn auth_headers(&self) -> Vec<(String, Option<String>)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|req| {
                let auth = req
                    .headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                (req.url.path().to_string(), auth)
            })
            .collect()
    }
}

/// Success envelope around `data`
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "ok",
        "data": data
    }))
}

/// Error envelope with the given HTTP status
pub fn fail(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "code": status,
        "message": message,
        "data": null
    }))
}

pub fn dash_menus() -> Value {
    json!({
        "list": [
            {"id": 1, "title": "Dash", "path": "/dash", "weight": 0},
            {"id": 3, "parentId": 1, "title": "Roles", "path": "roles", "weight": 1},
            {"id": 2, "parentId": 1, "title": "Users", "path": "users", "weight": 0}
        ]
    })
}

pub fn admin_user(nickname: Value) -> Value {
    json!({
        "id": 1,
        "username": "admin",
        "nickname": nickname,
        "email": "admin@example.com",
        "roles": ["admin"],
        "updatedAt": "2024-01-01 00:00:00",
        "createdAt": "2024-01-01 00:00:00"
    })
}
