use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::api::ApiClient;
use crate::error::{Result, SessionError};
use crate::router::{root_route, RouteContext, RouteSource};
use crate::session::navigator::Navigator;
use crate::session::state::{SessionRoutes, SessionState};
use crate::session::token::TokenStore;
use crate::types::{FlatRoute, LoginRequest, UserInfo};

/// Owns the session and is its only writer.
///
/// Readers take snapshots (`snapshot`) or subscribe to changes (`subscribe`);
/// every mutation publishes a fresh immutable `SessionState`.
pub struct SessionCoordinator {
    client: ApiClient,
    routes: Arc<dyn RouteSource>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    state: watch::Sender<Arc<SessionState>>,
    activation: Mutex<()>,
}

impl SessionCoordinator {
    pub fn new(
        client: ApiClient,
        routes: Arc<dyn RouteSource>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_path: impl Into<String>,
    ) -> Self {
        let initial = SessionState::with_token(tokens.get());
        let (state, _) = watch::channel(Arc::new(initial));
        Self {
            client,
            routes,
            tokens,
            navigator,
            login_path: login_path.into(),
            state,
            activation: Mutex::new(()),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn snapshot(&self) -> Arc<SessionState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionState>> {
        self.state.subscribe()
    }

    pub fn token(&self) -> Option<String> {
        self.snapshot().token.clone()
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.snapshot().user_info.clone()
    }

    pub fn avatar(&self) -> Option<String> {
        self.snapshot().avatar().map(str::to_string)
    }

    pub fn nickname(&self) -> Option<String> {
        self.snapshot().nickname().map(str::to_string)
    }

    pub fn roles(&self) -> Vec<String> {
        self.snapshot().roles().to_vec()
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        self.state.send_modify(|state| mutate(Arc::make_mut(state)));
    }

    /// Apply `mutate` only if no login or logout happened since `epoch`
    fn update_if_current(&self, epoch: u64, mutate: impl FnOnce(&mut SessionState)) -> bool {
        self.state.send_if_modified(|state| {
            if state.epoch != epoch {
                return false;
            }
            mutate(Arc::make_mut(state));
            true
        })
    }

    /// Exchange credentials for a token. A new identity invalidates any
    /// previously fetched user info and routes.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.update(|s| s.login_in_flight = true);
        tracing::info!("Logging in as {}", username);

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let data = match self.client.login(&request).await {
            Ok(data) => data,
            Err(e) => {
                self.update(|s| s.login_in_flight = false);
                tracing::warn!("Login failed for {}: {}", username, e);
                return Err(e.into());
            }
        };

        if data.access_token.is_empty() {
            self.update(|s| s.login_in_flight = false);
            return Err(SessionError::MissingToken.into());
        }

        if let Err(e) = self.tokens.set(Some(data.access_token.clone())) {
            self.update(|s| s.login_in_flight = false);
            return Err(e.into());
        }

        self.update(|s| {
            s.token = Some(data.access_token);
            s.user_info = None;
            s.routes = None;
            s.login_in_flight = false;
            s.torn_down = false;
            s.epoch += 1;
        });
        tracing::info!("Logged in as {}", username);
        Ok(())
    }

    /// Run the configured route source and store the result.
    ///
    /// Activations are serialized; each one re-fetches. On failure the previous
    /// menu and route data stay untouched. If the session was logged out or
    /// re-authenticated meanwhile, the result is discarded.
    pub async fn activate(&self) -> Result<FlatRoute> {
        let _serial = self.activation.lock().await;

        let start = self.snapshot();
        let ctx = RouteContext {
            roles: start.roles().to_vec(),
        };
        let bundle = self.routes.build_routes(&ctx).await.map_err(|e| {
            tracing::warn!("Route generation ({}) failed: {}", self.routes.name(), e);
            e
        })?;

        let root = root_route(bundle.route_data);
        let routes = SessionRoutes {
            menu_data: bundle.menu_data,
            router_data: root.clone(),
        };
        if !self.update_if_current(start.epoch(), |s| s.routes = Some(routes)) {
            tracing::info!("Discarding routes generated for a session that has ended");
            return Err(SessionError::Unauthenticated.into());
        }

        tracing::info!(
            "Session routes generated from {} source ({} top-level routes)",
            self.routes.name(),
            root.children.len()
        );
        Ok(root)
    }

    /// Fetch and store the current admin user
    pub async fn fetch_user_info(&self) -> Result<UserInfo> {
        let start = self.snapshot();
        if start.token.is_none() {
            return Err(SessionError::Unauthenticated.into());
        }

        let user = self.client.get_admin_user_info().await?;
        if !self.update_if_current(start.epoch(), |s| s.user_info = Some(user.clone())) {
            tracing::info!("Discarding user info fetched for a session that has ended");
            return Err(SessionError::Unauthenticated.into());
        }
        tracing::debug!("Fetched user info for {}", user.username);
        Ok(user)
    }

    /// Clear token, user info and routes, then navigate to the login page.
    /// Every step runs even when an earlier one fails or has nothing to clear.
    pub async fn logout(&self) -> Result<()> {
        let store_result = self.tokens.set(None);
        if let Err(e) = &store_result {
            tracing::warn!("Failed to clear persisted token: {}", e);
        }

        self.update(|s| {
            s.token = None;
            s.user_info = None;
            s.routes = None;
            s.login_in_flight = false;
            s.torn_down = true;
            s.epoch += 1;
        });

        tracing::info!("Session torn down");
        self.navigator.navigate(&self.login_path);

        store_result.map_err(Into::into)
    }
}
