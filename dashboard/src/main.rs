use std::sync::Arc;

use clap::Parser;
use dashboard::{Dashboard, HttpUsersApi, Mode};
use tokio::io::{BufReader, stdin, stdout};
use tracing_subscriber::{EnvFilter, fmt};

/// Manage users through the user manager API
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about)]
struct Cli {
    /// Base URL of the user API
    #[arg(long, env = "DASHBOARD_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// View shown first
    #[arg(long, value_enum, default_value_t = Mode::View)]
    mode: Mode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // stdout carries the rendered views
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();

    let api = Arc::new(HttpUsersApi::new(cli.base_url));
    let mut dashboard = Dashboard::new(api, cli.mode);
    dashboard.run(BufReader::new(stdin()), stdout()).await?;
    Ok(())
}
