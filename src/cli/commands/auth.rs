use std::io::{self, BufRead, Write};

use serde_json::json;

use crate::cli::config::CliContext;
use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;

fn prompt_password() -> anyhow::Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn login(
    ctx: &CliContext,
    username: String,
    password: Option<String>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    ctx.session.login(&username, &password).await?;
    output_success(
        &output_format,
        &format!("Logged in as {}", username),
        Some(json!({ "username": username })),
    )
}

pub async fn logout(ctx: &CliContext, output_format: OutputFormat) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    output_success(&output_format, "Logged out", None)
}

pub async fn whoami(ctx: &CliContext, output_format: OutputFormat) -> anyhow::Result<()> {
    let user = ctx.session.fetch_user_info().await?;
    match output_format {
        OutputFormat::Json => output_data(&output_format, &serde_json::to_value(&user)?),
        OutputFormat::Text => {
            println!("User: {} ({})", ctx.session.nickname().unwrap_or_default(), user.username);
            if let Some(email) = &user.email {
                println!("Email: {}", email);
            }
            println!("Roles: {}", user.roles.join(", "));
            if let Some(avatar) = ctx.session.avatar() {
                println!("Avatar: {}", avatar);
            }
            Ok(())
        }
    }
}
