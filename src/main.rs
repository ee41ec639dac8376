use clap::Parser;
use tracing_subscriber::EnvFilter;

use admin_console::cli::{self, utils::output_error, Cli, OutputFormat};

#[tokio::main]
async fn main() {
    // Load .env if present so ADMIN_API_BASE_URL, DYNAMIC_LOAD_WAY, etc. are picked up
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = admin_console::config::config();
    tracing::debug!("Starting admin console in {:?} mode", config.environment);

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = cli::run(cli).await {
        let code = e
            .downcast_ref::<admin_console::Error>()
            .map(error_code)
            .or_else(|| e.downcast_ref::<admin_console::RequestError>().map(|r| r.error_code()));
        let _ = output_error(&output_format, &e.to_string(), code);
        std::process::exit(1);
    }
}

fn error_code(err: &admin_console::Error) -> &'static str {
    match err {
        admin_console::Error::Request(e) => e.error_code(),
        admin_console::Error::RouteSource(_) => "ROUTE_SOURCE_ERROR",
        admin_console::Error::Session(_) => "SESSION_ERROR",
    }
}
