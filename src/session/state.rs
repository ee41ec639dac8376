use crate::types::{FlatRoute, MenuTreeNode, UserInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No credential
    Uninitialized,
    /// Login in flight, or credential present while identity/routes are still missing
    Authenticating,
    /// Token, user info and routes all populated
    Active,
    /// Logged out
    TornDown,
}

/// Menu forest and router root, always stored and cleared together
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRoutes {
    pub menu_data: Vec<MenuTreeNode>,
    pub router_data: FlatRoute,
}

/// Immutable snapshot of the session, published by the coordinator
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub routes: Option<SessionRoutes>,
    pub(crate) login_in_flight: bool,
    pub(crate) torn_down: bool,
    /// Bumped by login and logout; work started under an older epoch is discarded
    pub(crate) epoch: u64,
}

impl SessionState {
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.login_in_flight {
            return SessionPhase::Authenticating;
        }
        match (&self.token, &self.user_info, &self.routes) {
            (Some(_), Some(_), Some(_)) => SessionPhase::Active,
            (Some(_), _, _) => SessionPhase::Authenticating,
            (None, _, _) if self.torn_down => SessionPhase::TornDown,
            (None, _, _) => SessionPhase::Uninitialized,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn menu_data(&self) -> &[MenuTreeNode] {
        self.routes.as_ref().map(|r| r.menu_data.as_slice()).unwrap_or(&[])
    }

    pub fn router_data(&self) -> Option<&FlatRoute> {
        self.routes.as_ref().map(|r| &r.router_data)
    }

    pub fn avatar(&self) -> Option<&str> {
        avatar(self.user_info.as_ref())
    }

    pub fn nickname(&self) -> Option<&str> {
        nickname(self.user_info.as_ref())
    }

    pub fn roles(&self) -> &[String] {
        roles(self.user_info.as_ref())
    }
}

// Derived fields are plain projections of the user info

pub fn avatar(user: Option<&UserInfo>) -> Option<&str> {
    user.and_then(|u| u.avatar.as_deref())
}

/// Display name, falling back to the username when it is empty or missing
pub fn nickname(user: Option<&UserInfo>) -> Option<&str> {
    let user = user?;
    match user.nickname.as_deref() {
        Some(name) if !name.is_empty() => Some(name),
        _ => Some(user.username.as_str()),
    }
}

pub fn roles(user: Option<&UserInfo>) -> &[String] {
    user.map(|u| u.roles.as_slice()).unwrap_or(&[])
}
