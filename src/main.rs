use std::{io::Error, sync::Arc, time::Duration};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::{info, warn};

use user_manager::{
    config::Config,
    domain::repositories::UserRepository,
    infrastructure::repositories::{InMemoryUserRepository, PostgresUserRepository, postgres},
    logging,
    presentation::http::{build_app, endpoints::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    logging::init();

    let repo: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = postgres::connect(url, config.database_max_connections)
                .await
                .map_err(|err| Error::other(format!("{err:#}")))?;
            info!("using postgres user store");
            PostgresUserRepository::new(pool)
        }
        None => {
            warn!("DATABASE_URL not set, records are kept in memory only");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let server_url = config.server_url();
    info!(%server_url, "starting server");

    let app = build_app(ApiState::new(repo), server_url);

    Server::new(TcpListener::bind(config.bind_address()))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await
}
