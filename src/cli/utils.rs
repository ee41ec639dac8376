use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::types::{Envelope, FlatRoute, MenuTreeNode};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Report a write acknowledged by the backend. The server's message wins over
/// `fallback` unless it is the generic "ok"; any payload is passed along.
pub fn output_envelope(
    output_format: &OutputFormat,
    fallback: &str,
    envelope: Envelope,
) -> anyhow::Result<()> {
    let message = envelope_message(&envelope, fallback);
    let data = Some(envelope.data).filter(|d| !d.is_null());
    output_success(output_format, &message, data)
}

fn envelope_message(envelope: &Envelope, fallback: &str) -> String {
    let message = envelope.message.trim();
    if message.is_empty() || message.eq_ignore_ascii_case("ok") {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output a response payload; text mode prints it as indented JSON too
pub fn output_data(output_format: &OutputFormat, data: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({ "success": true, "data": data });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

/// Render a menu forest as an indented outline
pub fn render_menu_tree(nodes: &[MenuTreeNode]) -> String {
    let mut out = String::new();
    render_menu_level(nodes, 0, &mut out);
    out
}

fn render_menu_level(nodes: &[MenuTreeNode], depth: usize, out: &mut String) {
    for node in nodes {
        let hidden = if node.record.hide_in_menu { " (hidden)" } else { "" };
        let indent = "  ".repeat(depth);
        let line = format!("{}- {} [{}]{}\n", indent, node.record.title, node.record.path, hidden);
        out.push_str(&line);
        render_menu_level(&node.children, depth + 1, out);
    }
}

/// Render a route table as an indented outline
pub fn render_routes(routes: &[FlatRoute]) -> String {
    let mut out = String::new();
    render_route_level(routes, 0, &mut out);
    out
}

fn render_route_level(routes: &[FlatRoute], depth: usize, out: &mut String) {
    for route in routes {
        let component = route.component.as_deref().unwrap_or("-");
        let indent = "  ".repeat(depth);
        out.push_str(&format!("{}{}  {}  {}\n", indent, route.path, component, route.meta.title));
        render_route_level(&route.children, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{build_menu_tree, to_routes};
    use crate::types::MenuRecord;

    fn forest() -> Vec<MenuTreeNode> {
        build_menu_tree(&[
            MenuRecord {
                id: 1,
                title: "Dash".into(),
                path: "/dash".into(),
                ..MenuRecord::default()
            },
            MenuRecord {
                id: 2,
                parent_id: Some(1),
                title: "Users".into(),
                path: "users".into(),
                hide_in_menu: true,
                ..MenuRecord::default()
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_envelope_message_prefers_server_text() {
        let envelope = |message: &str| Envelope {
            message: message.to_string(),
            ..Envelope::default()
        };
        assert_eq!(envelope_message(&envelope("ok"), "Role created"), "Role created");
        assert_eq!(envelope_message(&envelope(""), "Role created"), "Role created");
        assert_eq!(envelope_message(&envelope("创建成功"), "Role created"), "创建成功");
    }

    #[test]
    fn test_render_menu_tree() {
        let expected = "- Dash [/dash]\n  - Users [users] (hidden)\n";
        assert_eq!(render_menu_tree(&forest()), expected);
    }

    #[test]
    fn test_render_routes() {
        let rendered = render_routes(&to_routes(&forest()));
        assert_eq!(rendered, "/dash  RouteView  Dash\n  /dash/users  -  Users\n");
    }
}
