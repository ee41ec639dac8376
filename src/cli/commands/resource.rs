use clap::Subcommand;
use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::cli::config::CliContext;
use crate::cli::utils::{output_data, output_envelope};
use crate::cli::OutputFormat;
use crate::error::RequestError;

#[derive(Debug, Clone, Copy)]
pub enum Resource {
    Role,
    Menu,
    User,
    Api,
}

impl Resource {
    fn label(&self) -> &'static str {
        match self {
            Resource::Role => "Role",
            Resource::Menu => "Menu",
            Resource::User => "User",
            Resource::Api => "API",
        }
    }
}

#[derive(Subcommand)]
pub enum CrudCommands {
    #[command(about = "List records")]
    List {
        #[arg(long, help = "Query parameters as a JSON object")]
        query: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },

    #[command(about = "Create a record")]
    Create {
        #[arg(help = "Record as a JSON object")]
        data: String,
    },

    #[command(about = "Update a record")]
    Update {
        #[arg(help = "Record as a JSON object, including its id")]
        data: String,
    },

    #[command(about = "Delete a record")]
    Delete {
        #[arg(help = "Record id")]
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum PermissionCommands {
    #[command(about = "Show permissions granted to a role")]
    Role {
        #[arg(help = "Role sid")]
        role: String,
    },

    #[command(about = "Show permissions of the current user")]
    Mine,

    #[command(about = "Replace the permissions of a role")]
    Update {
        #[arg(help = "Role sid")]
        role: String,
        #[arg(help = "Permission entries, e.g. menu:/access/roles or api:/v1/admin/roles,GET")]
        list: Vec<String>,
    },
}

fn parse_object(raw: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(anyhow::anyhow!("Expected a JSON object, got: {}", raw));
    }
    Ok(value)
}

fn list_params(query: Option<String>, page: u32, page_size: u32) -> anyhow::Result<Value> {
    let mut params = match query {
        Some(raw) => parse_object(&raw)?,
        None => json!({}),
    };
    params["page"] = json!(page);
    params["pageSize"] = json!(page_size);
    Ok(params)
}

async fn list(
    client: &ApiClient,
    resource: Resource,
    params: Value,
) -> Result<Value, RequestError> {
    let data = match resource {
        Resource::Role => serde_json::to_value(client.get_roles(params).await?)?,
        Resource::Menu => serde_json::to_value(client.get_admin_menus().await?)?,
        Resource::User => serde_json::to_value(client.get_admin_users(params).await?)?,
        Resource::Api => serde_json::to_value(client.get_apis(params).await?)?,
    };
    Ok(data)
}

pub async fn handle(
    ctx: &CliContext,
    resource: Resource,
    cmd: CrudCommands,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let client = ctx.session.client();

    match cmd {
        CrudCommands::List { query, page, page_size } => {
            let data = list(client, resource, list_params(query, page, page_size)?).await?;
            output_data(&output_format, &data)
        }
        CrudCommands::Create { data } => {
            let params = parse_object(&data)?;
            let envelope = match resource {
                Resource::Role => client.create_role(params).await?,
                Resource::Menu => client.create_menu(params).await?,
                Resource::User => client.create_admin_user(params).await?,
                Resource::Api => client.create_api(params).await?,
            };
            output_envelope(&output_format, &format!("{} created", resource.label()), envelope)
        }
        CrudCommands::Update { data } => {
            let params = parse_object(&data)?;
            let envelope = match resource {
                Resource::Role => client.update_role(params).await?,
                Resource::Menu => client.update_menu(params).await?,
                Resource::User => client.update_admin_user(params).await?,
                Resource::Api => client.update_api(params).await?,
            };
            output_envelope(&output_format, &format!("{} updated", resource.label()), envelope)
        }
        CrudCommands::Delete { id } => {
            let params = json!({ "id": id });
            let envelope = match resource {
                Resource::Role => client.delete_role(params).await?,
                Resource::Menu => client.delete_menu(params).await?,
                Resource::User => client.delete_admin_user(params).await?,
                Resource::Api => client.delete_api(params).await?,
            };
            let fallback = format!("{} {} deleted", resource.label(), id);
            output_envelope(&output_format, &fallback, envelope)
        }
    }
}

pub async fn handle_permissions(
    ctx: &CliContext,
    cmd: PermissionCommands,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let client = ctx.session.client();

    match cmd {
        PermissionCommands::Role { role } => {
            let permissions = client.get_role_permissions(json!({ "role": role })).await?;
            output_data(&output_format, &serde_json::to_value(permissions)?)
        }
        PermissionCommands::Mine => {
            let permissions = client.get_user_permissions(Value::Null).await?;
            output_data(&output_format, &serde_json::to_value(permissions)?)
        }
        PermissionCommands::Update { role, list } => {
            let envelope = client
                .update_role_permissions(json!({ "role": role, "list": list }))
                .await?;
            let fallback = format!("Permissions of role '{}' updated", role);
            output_envelope(&output_format, &fallback, envelope)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_merge_paging() {
        let params = list_params(Some(r#"{"name":"Admin"}"#.into()), 2, 20).unwrap();
        assert_eq!(params, json!({"name": "Admin", "page": 2, "pageSize": 20}));
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert!(parse_object("[1,2]").is_err());
        assert!(parse_object("not json").is_err());
    }
}
