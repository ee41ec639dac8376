use crate::types::MenuRecord;

/// A compiled-in route declaration used by the static loading strategy
#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub locale: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub component: Option<&'static str>,
    pub access: &'static [&'static str],
    pub hide_in_menu: bool,
    pub keep_alive: bool,
    pub children: &'static [StaticRoute],
}

impl StaticRoute {
    pub const fn leaf(path: &'static str, name: &'static str, title: &'static str) -> Self {
        Self {
            path,
            name,
            title,
            locale: None,
            icon: None,
            component: None,
            access: &[],
            hide_in_menu: false,
            keep_alive: false,
            children: &[],
        }
    }
}

const ADMIN: &[&str] = &["admin"];

/// Default console route table
pub static DYNAMIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/dashboard",
        name: "Dashboard",
        title: "Dashboard",
        locale: Some("menu.dashboard"),
        icon: Some("DashboardOutlined"),
        component: Some("RouteView"),
        access: &[],
        hide_in_menu: false,
        keep_alive: false,
        children: &[StaticRoute {
            locale: Some("menu.dashboard.analysis"),
            component: Some("/dashboard/analysis/index.vue"),
            ..StaticRoute::leaf("/dashboard/analysis", "DashboardAnalysis", "Analysis")
        }],
    },
    StaticRoute {
        path: "/access",
        name: "Access",
        title: "Access control",
        locale: Some("menu.access"),
        icon: Some("ClusterOutlined"),
        component: Some("RouteView"),
        access: ADMIN,
        hide_in_menu: false,
        keep_alive: false,
        children: &[
            StaticRoute {
                locale: Some("menu.access.admin"),
                component: Some("/access/admin.vue"),
                access: ADMIN,
                ..StaticRoute::leaf("/access/admin", "AccessAdmin", "Admin users")
            },
            StaticRoute {
                locale: Some("menu.access.roles"),
                component: Some("/access/role.vue"),
                access: ADMIN,
                ..StaticRoute::leaf("/access/roles", "AccessRoles", "Roles")
            },
            StaticRoute {
                locale: Some("menu.access.menus"),
                component: Some("/access/menu.vue"),
                access: ADMIN,
                ..StaticRoute::leaf("/access/menus", "AccessMenus", "Menus")
            },
            StaticRoute {
                locale: Some("menu.access.apis"),
                component: Some("/access/api.vue"),
                access: ADMIN,
                ..StaticRoute::leaf("/access/apis", "AccessApis", "API registry")
            },
        ],
    },
    StaticRoute {
        path: "/account",
        name: "Account",
        title: "Account",
        locale: Some("menu.account"),
        icon: Some("UserOutlined"),
        component: Some("RouteView"),
        access: &[],
        hide_in_menu: false,
        keep_alive: false,
        children: &[
            StaticRoute {
                locale: Some("menu.account.center"),
                component: Some("/account/center.vue"),
                ..StaticRoute::leaf("/account/center", "AccountCenter", "Personal center")
            },
            StaticRoute {
                locale: Some("menu.account.settings"),
                component: Some("/account/settings.vue"),
                keep_alive: true,
                ..StaticRoute::leaf("/account/settings", "AccountSettings", "Settings")
            },
        ],
    },
];

/// Lower a static table into menu records so it goes through the same tree
/// and route conversion as backend data. Ids are assigned depth first from 1.
pub fn to_menu_records(table: &[StaticRoute]) -> Vec<MenuRecord> {
    let mut records = Vec::new();
    let mut next_id = 1;
    lower(table, None, &mut next_id, &mut records);
    records
}

fn lower(
    routes: &[StaticRoute],
    parent: Option<u64>,
    next_id: &mut u64,
    out: &mut Vec<MenuRecord>,
) {
    for (rank, route) in routes.iter().enumerate() {
        let id = *next_id;
        *next_id += 1;

        out.push(MenuRecord {
            id,
            parent_id: parent,
            rank: rank as i64,
            path: route.path.to_string(),
            title: route.title.to_string(),
            name: Some(route.name.to_string()),
            component: route.component.map(str::to_string),
            locale: route.locale.map(str::to_string),
            icon: route.icon.map(str::to_string),
            keep_alive: route.keep_alive,
            hide_in_menu: route.hide_in_menu,
            access: route.access.iter().map(|s| s.to_string()).collect(),
            ..MenuRecord::default()
        });

        lower(route.children, Some(id), next_id, out);
    }
}
