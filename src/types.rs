//! Shared wire and navigation types used across the codebase

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RequestError;

/// Standard backend response envelope: `{code, message, data}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Decode the `data` payload into a concrete type
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        serde_json::from_value(self.data).map_err(RequestError::from)
    }
}

/// Paged list payload: `{list, total}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

/// One navigation entry, as declared by the backend or the static route table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    #[serde(default)]
    pub id: u64,
    /// `None` marks a root record; the backend omits or zeroes it for roots
    #[serde(
        default,
        deserialize_with = "deserialize_parent_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<u64>,
    #[serde(default, rename = "weight")]
    pub rank: i64,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub component: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub locale: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub redirect: Option<String>,
    #[serde(default)]
    pub keep_alive: bool,
    #[serde(default)]
    pub hide_in_menu: bool,
    /// Iframe target
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    /// Roles allowed to see this entry; empty means everyone
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

/// A menu record with its ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuTreeNode {
    #[serde(flatten)]
    pub record: MenuRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn leaf(record: MenuRecord) -> Self {
        Self { record, children: Vec::new() }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(MenuTreeNode::len).sum::<usize>()
    }
}

/// Route metadata consumed by the navigation UI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<String>,
    #[serde(default)]
    pub keep_alive: bool,
    #[serde(default)]
    pub hide_in_menu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Router-registration record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRoute {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FlatRoute>,
}

/// Current admin user as returned by `GET /v1/admin/user`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub sid: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Entry of the admin API registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntry {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub method: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiListData {
    #[serde(default)]
    pub list: Vec<ApiEntry>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PermissionList {
    #[serde(default)]
    pub list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub access_token: String,
}

fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parent = Option::<u64>::deserialize(deserializer)?;
    Ok(parent.filter(|id| *id != 0))
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_menu_record_from_backend_item() {
        let record: MenuRecord = serde_json::from_value(json!({
            "id": 7,
            "parentId": 0,
            "weight": 3,
            "path": "/access/roles",
            "title": "Roles",
            "component": "",
            "keepAlive": true
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.parent_id, None);
        assert_eq!(record.rank, 3);
        assert_eq!(record.component, None);
        assert!(record.keep_alive);
        assert!(!record.hide_in_menu);
    }

    #[test]
    fn test_envelope_into_data() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": 0,
            "message": "ok",
            "data": {"list": [{"id": 1, "name": "Admin", "sid": "admin"}], "total": 1}
        }))
        .unwrap();

        let roles: ListData<Role> = envelope.into_data().unwrap();
        assert_eq!(roles.total, 1);
        assert_eq!(roles.list[0].sid, "admin");
    }

    #[test]
    fn test_user_info_with_null_nickname() {
        let user: UserInfo = serde_json::from_value(json!({
            "id": 1,
            "username": "admin",
            "nickname": null,
            "roles": ["admin"]
        }))
        .unwrap();
        assert_eq!(user.nickname, None);
        assert_eq!(user.roles, vec!["admin".to_string()]);
    }
}
