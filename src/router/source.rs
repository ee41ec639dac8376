use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::config::DynamicLoadWay;
use crate::error::RouteSourceError;
use crate::router::access::filter_by_roles;
use crate::router::routes::{convert_forest, dedupe_paths};
use crate::router::static_table::{to_menu_records, StaticRoute, DYNAMIC_ROUTES};
use crate::router::tree::build_menu_tree;
use crate::types::{FlatRoute, MenuTreeNode};

/// What the active session knows when routes are generated
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    pub roles: Vec<String>,
}

/// Output of one route generation: the menu forest and the route table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteBundle {
    pub menu_data: Vec<MenuTreeNode>,
    pub route_data: Vec<FlatRoute>,
}

impl RouteBundle {
    /// Entries with a repeated path are dropped from both halves
    pub fn from_forest(forest: Vec<MenuTreeNode>) -> Self {
        let menu_data = dedupe_paths(&forest);
        let route_data = convert_forest(&menu_data);
        Self {
            menu_data,
            route_data,
        }
    }
}

/// A route-sourcing strategy
#[async_trait]
pub trait RouteSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce the whole bundle or fail; never a partial result
    async fn build_routes(&self, ctx: &RouteContext) -> Result<RouteBundle, RouteSourceError>;
}

/// Routes come from the caller's permitted menus on the backend
pub struct BackendRouteSource {
    client: ApiClient,
}

impl BackendRouteSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RouteSource for BackendRouteSource {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn build_routes(&self, _ctx: &RouteContext) -> Result<RouteBundle, RouteSourceError> {
        let menus = self.client.get_menus().await?;
        tracing::debug!("Fetched {} menu records", menus.list.len());
        let forest = build_menu_tree(&menus.list)?;
        Ok(RouteBundle::from_forest(forest))
    }
}

/// Routes come from a compiled-in table filtered by the session's roles
pub struct StaticRouteSource {
    table: &'static [StaticRoute],
}

impl StaticRouteSource {
    pub fn new(table: &'static [StaticRoute]) -> Self {
        Self { table }
    }
}

impl Default for StaticRouteSource {
    fn default() -> Self {
        Self::new(DYNAMIC_ROUTES)
    }
}

#[async_trait]
impl RouteSource for StaticRouteSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn build_routes(&self, ctx: &RouteContext) -> Result<RouteBundle, RouteSourceError> {
        let forest = build_menu_tree(&to_menu_records(self.table))?;
        let permitted = filter_by_roles(&forest, &ctx.roles);
        Ok(RouteBundle::from_forest(permitted))
    }
}

/// Pick the strategy once, at configuration time
pub fn route_source(way: DynamicLoadWay, client: ApiClient) -> Arc<dyn RouteSource> {
    match way {
        DynamicLoadWay::Backend => Arc::new(BackendRouteSource::new(client)),
        DynamicLoadWay::Static => Arc::new(StaticRouteSource::default()),
    }
}
