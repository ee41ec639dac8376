use std::collections::HashSet;

use crate::types::{FlatRoute, MenuTreeNode, RouteMeta};

pub const ROOT_ROUTE_PATH: &str = "/";
pub const ROOT_ROUTE_NAME: &str = "rootPath";
pub const ROOT_COMPONENT: &str = "BasicLayout";
pub const PARENT_COMPONENT: &str = "RouteView";
pub const IFRAME_COMPONENT: &str = "Iframe";

/// Convert a menu forest into router records, depth first.
///
/// Child order follows the forest. Relative child paths are joined onto the
/// parent's path; absolute paths and external links are kept as given. Within
/// one parent scope the first route for a path wins.
pub fn to_routes(forest: &[MenuTreeNode]) -> Vec<FlatRoute> {
    convert_forest(&dedupe_paths(forest))
}

/// Drop every node whose resolved path repeats an earlier sibling's, along
/// with its subtree. The menu forest and the route table are both built from
/// the result so they list the same entries.
pub fn dedupe_paths(forest: &[MenuTreeNode]) -> Vec<MenuTreeNode> {
    dedupe_scope(forest, ROOT_ROUTE_PATH)
}

fn dedupe_scope(nodes: &[MenuTreeNode], parent_path: &str) -> Vec<MenuTreeNode> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(nodes.len());

    for node in nodes {
        let path = resolve_path(parent_path, &node.record.path);
        if !seen.insert(path.clone()) {
            tracing::warn!(
                "Skipping menu '{}' (id {}): path {} already registered under {}",
                node.record.title,
                node.record.id,
                path,
                parent_path
            );
            continue;
        }
        kept.push(MenuTreeNode {
            record: node.record.clone(),
            children: dedupe_scope(&node.children, &path),
        });
    }

    kept
}

/// Convert a forest that already went through `dedupe_paths`
pub(crate) fn convert_forest(forest: &[MenuTreeNode]) -> Vec<FlatRoute> {
    convert_scope(forest, ROOT_ROUTE_PATH)
}

fn convert_scope(nodes: &[MenuTreeNode], parent_path: &str) -> Vec<FlatRoute> {
    nodes.iter().map(|node| convert_node(node, parent_path)).collect()
}

fn convert_node(node: &MenuTreeNode, parent_path: &str) -> FlatRoute {
    let record = &node.record;
    let path = resolve_path(parent_path, &record.path);
    let children = convert_scope(&node.children, &path);

    let component = record.component.clone().or_else(|| {
        if record.url.is_some() {
            Some(IFRAME_COMPONENT.to_string())
        } else if !children.is_empty() {
            Some(PARENT_COMPONENT.to_string())
        } else {
            None
        }
    });

    let redirect = record
        .redirect
        .clone()
        .or_else(|| children.first().map(|c| c.path.clone()));

    FlatRoute {
        path,
        name: record.name.clone(),
        component,
        redirect,
        meta: RouteMeta {
            title: record.title.clone(),
            icon: record.icon.clone(),
            locale: record.locale.clone(),
            access: record.access.clone(),
            keep_alive: record.keep_alive,
            hide_in_menu: record.hide_in_menu,
            url: record.url.clone(),
        },
        children,
    }
}

/// Join a possibly relative child path onto its parent
pub fn resolve_path(parent: &str, path: &str) -> String {
    if path.starts_with('/') || is_external(path) {
        return path.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if path.is_empty() {
        return if parent.is_empty() { ROOT_ROUTE_PATH.to_string() } else { parent.to_string() };
    }
    format!("{}/{}", parent, path)
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Wrap the route table in the fixed layout root
pub fn root_route(children: Vec<FlatRoute>) -> FlatRoute {
    FlatRoute {
        path: ROOT_ROUTE_PATH.to_string(),
        name: Some(ROOT_ROUTE_NAME.to_string()),
        component: Some(ROOT_COMPONENT.to_string()),
        redirect: children.first().map(|c| c.path.clone()),
        meta: RouteMeta {
            title: String::new(),
            ..RouteMeta::default()
        },
        children,
    }
}

/// Every registered path, depth first
pub fn route_paths(routes: &[FlatRoute]) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(routes, &mut paths);
    paths
}

fn collect_paths(routes: &[FlatRoute], out: &mut Vec<String>) {
    for route in routes {
        out.push(route.path.clone());
        collect_paths(&route.children, out);
    }
}

/// Find a route by its resolved path
pub fn find_route<'a>(routes: &'a [FlatRoute], path: &str) -> Option<&'a FlatRoute> {
    for route in routes {
        if route.path == path {
            return Some(route);
        }
        if let Some(found) = find_route(&route.children, path) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::tree::build_menu_tree;
    use crate::types::MenuRecord;

    fn record(id: u64, parent: Option<u64>, title: &str, path: &str, rank: i64) -> MenuRecord {
        MenuRecord {
            id,
            parent_id: parent,
            title: title.to_string(),
            path: path.to_string(),
            rank,
            ..MenuRecord::default()
        }
    }

    fn sample_forest() -> Vec<MenuTreeNode> {
        build_menu_tree(&[
            record(1, None, "Dash", "/dashboard", 0),
            record(2, Some(1), "Users", "users", 0),
            record(3, Some(1), "Roles", "/dashboard/roles", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_nesting_and_order_preserved() {
        let routes = to_routes(&sample_forest());

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/dashboard");
        assert_eq!(routes[0].meta.title, "Dash");
        assert_eq!(routes[0].component.as_deref(), Some(PARENT_COMPONENT));
        assert_eq!(routes[0].redirect.as_deref(), Some("/dashboard/users"));

        let children: Vec<_> = routes[0].children.iter().map(|r| r.meta.title.as_str()).collect();
        assert_eq!(children, vec!["Users", "Roles"]);
        assert_eq!(routes[0].children[0].path, "/dashboard/users");
    }

    #[test]
    fn test_flattening_is_idempotent() {
        let forest = sample_forest();
        let first = serde_json::to_vec(&to_routes(&forest)).unwrap();
        let second = serde_json::to_vec(&to_routes(&forest)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_paths_keep_first() {
        let forest = build_menu_tree(&[
            record(1, None, "First", "/same", 0),
            record(2, None, "Second", "/same", 1),
            record(3, None, "Other", "/other", 2),
        ])
        .unwrap();

        let routes = to_routes(&forest);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].meta.title, "First");
    }

    #[test]
    fn test_dedupe_drops_nested_duplicates_from_forest() {
        let forest = build_menu_tree(&[
            record(1, None, "A", "/a", 0),
            record(2, Some(1), "List", "list", 0),
            record(3, Some(1), "List again", "/a/list", 1),
            record(4, Some(3), "Under dropped", "detail", 0),
        ])
        .unwrap();

        let deduped = dedupe_paths(&forest);
        let total: usize = deduped.iter().map(MenuTreeNode::len).sum();
        assert_eq!(total, 2);
        assert_eq!(deduped[0].children[0].record.title, "List");
        assert_eq!(route_paths(&to_routes(&forest)), vec!["/a", "/a/list"]);
    }

    #[test]
    fn test_same_path_allowed_in_different_scopes() {
        let forest = build_menu_tree(&[
            record(1, None, "A", "/a", 0),
            record(2, None, "B", "/b", 1),
            record(3, Some(1), "A list", "list", 0),
            record(4, Some(2), "B list", "list", 0),
        ])
        .unwrap();

        let paths = route_paths(&to_routes(&forest));
        assert_eq!(paths, vec!["/a", "/a/list", "/b", "/b/list"]);
    }

    #[test]
    fn test_iframe_component_for_url_entries() {
        let mut entry = record(1, None, "Docs", "/docs", 0);
        entry.url = Some("https://docs.example.com".into());
        let routes = to_routes(&build_menu_tree(&[entry]).unwrap());
        assert_eq!(routes[0].component.as_deref(), Some(IFRAME_COMPONENT));
        assert_eq!(routes[0].meta.url.as_deref(), Some("https://docs.example.com"));
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path("/", "dashboard"), "/dashboard");
        assert_eq!(resolve_path("/access/", "roles"), "/access/roles");
        assert_eq!(resolve_path("/access", "/abs"), "/abs");
        assert_eq!(resolve_path("/access", "https://x.dev"), "https://x.dev");
        assert_eq!(resolve_path("/access", ""), "/access");
        assert_eq!(resolve_path("/", ""), "/");
    }

    #[test]
    fn test_root_route_wraps_table() {
        let root = root_route(to_routes(&sample_forest()));
        assert_eq!(root.path, "/");
        assert_eq!(root.component.as_deref(), Some(ROOT_COMPONENT));
        assert_eq!(root.redirect.as_deref(), Some("/dashboard"));
        assert!(find_route(&[root.clone()], "/dashboard/roles").is_some());
        assert!(find_route(&[root], "/missing").is_none());
    }

    #[test]
    fn test_root_route_without_children() {
        let root = root_route(Vec::new());
        assert!(root.children.is_empty());
        assert_eq!(root.redirect, None);
    }
}
