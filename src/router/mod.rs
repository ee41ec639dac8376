pub mod access;
pub mod routes;
pub mod source;
pub mod static_table;
pub mod tree;

pub use access::filter_by_roles;
pub use routes::{find_route, root_route, route_paths, to_routes};
pub use source::{
    route_source, BackendRouteSource, RouteBundle, RouteContext, RouteSource, StaticRouteSource,
};
pub use tree::build_menu_tree;
