use serde_json::json;

use crate::cli::config::CliContext;
use crate::cli::utils::{output_data, output_success, render_menu_tree, render_routes};
use crate::cli::OutputFormat;
use crate::session::GuardDecision;

/// Bring the session to a usable state the same way the router guard would
async fn ensure_session(ctx: &CliContext, path: &str) -> anyhow::Result<()> {
    match ctx.guard.before_each(path).await? {
        GuardDecision::Proceed => Ok(()),
        GuardDecision::Redirect(target) => {
            Err(anyhow::anyhow!("Not logged in (redirect to {})", target))
        }
    }
}

pub async fn routes(
    ctx: &CliContext,
    check: Option<String>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    if let Some(path) = check {
        let decision = ctx.guard.before_each(&path).await?;
        let (allowed, target) = match &decision {
            GuardDecision::Proceed => (true, None),
            GuardDecision::Redirect(target) => (false, Some(target.clone())),
        };
        return output_success(
            &output_format,
            &match &target {
                Some(t) => format!("{} -> redirect to {}", path, t),
                None => format!("{} -> proceed", path),
            },
            Some(json!({ "path": path, "allowed": allowed, "redirect": target })),
        );
    }

    ensure_session(ctx, "/").await?;
    let state = ctx.session.snapshot();
    let Some(root) = state.router_data() else {
        return Err(anyhow::anyhow!("No routes generated"));
    };

    match output_format {
        OutputFormat::Json => output_data(&output_format, &serde_json::to_value(root)?),
        OutputFormat::Text => {
            print!("{}", render_routes(std::slice::from_ref(root)));
            Ok(())
        }
    }
}

pub async fn menus(ctx: &CliContext, output_format: OutputFormat) -> anyhow::Result<()> {
    ensure_session(ctx, "/").await?;
    let state = ctx.session.snapshot();

    match output_format {
        OutputFormat::Json => {
            output_data(&output_format, &serde_json::to_value(state.menu_data())?)
        }
        OutputFormat::Text => {
            print!("{}", render_menu_tree(state.menu_data()));
            Ok(())
        }
    }
}
