use std::sync::Arc;

use url::form_urlencoded;

use crate::error::Result;
use crate::session::coordinator::SessionCoordinator;

/// What the router should do with a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Router guard run before every navigation
pub struct RouteGuard {
    session: Arc<SessionCoordinator>,
    white_list: Vec<String>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionCoordinator>, white_list: Vec<String>) -> Self {
        Self { session, white_list }
    }

    fn is_white_listed(&self, path: &str) -> bool {
        self.white_list.iter().any(|p| p == path)
    }

    fn login_redirect(&self, to: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(to.as_bytes()).collect();
        format!("{}?redirect={}", self.session.login_path(), encoded)
    }

    /// Make sure the session is usable for `to`.
    ///
    /// Without a token only white-listed paths pass. With a token, missing user
    /// info is fetched and missing routes are generated first. A rejected
    /// credential tears the session down and sends the user to login.
    pub async fn before_each(&self, to: &str) -> Result<GuardDecision> {
        let state = self.session.snapshot();

        if !state.is_authenticated() {
            if self.is_white_listed(to) {
                return Ok(GuardDecision::Proceed);
            }
            tracing::debug!("No session for {}, redirecting to login", to);
            return Ok(GuardDecision::Redirect(self.login_redirect(to)));
        }

        if let Err(e) = self.prepare(state.user_info.is_none(), state.routes.is_none()).await {
            if e.is_unauthorized() {
                tracing::info!("Credential rejected while entering {}: {}", to, e);
                self.session.logout().await?;
                return Ok(GuardDecision::Redirect(self.login_redirect(to)));
            }
            return Err(e);
        }

        Ok(GuardDecision::Proceed)
    }

    async fn prepare(&self, needs_user: bool, needs_routes: bool) -> Result<()> {
        if needs_user {
            self.session.fetch_user_info().await?;
        }
        if needs_routes {
            self.session.activate().await?;
        }
        Ok(())
    }
}
