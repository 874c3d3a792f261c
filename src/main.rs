use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use dukaan_api::config::Config;
use dukaan_api::db::{MongoStore, newsletter};
use dukaan_api::email;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting MakeMyDukaan API");

    let store = MongoStore::connect(&config.mongo_url, &config.db_name).await?;
    tracing::info!("Connected to database {}", config.db_name);

    if config.newsletter_unique_index {
        match store.ensure_unique_index(newsletter::COLLECTION, "email").await {
            Ok(()) => tracing::info!("Unique index on newsletter.email is in place"),
            // Existing duplicate rows block the index; the lookup still guards sequential requests.
            Err(e) => tracing::warn!("Could not create unique index on newsletter.email: {e}"),
        }
    }

    let mailer = email::build_sender(&config.email)?;
    if mailer.is_none() {
        tracing::warn!("No email transport configured, contact notifications are disabled");
    }

    let addr = SocketAddr::new(config.host, config.port);
    let app = dukaan_api::build_app(Arc::new(store), mailer, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM. A handler that cannot be installed is
/// logged and never fires, so the other one still stops the server.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = ctrl_c => "Ctrl-C",
        _ = terminate => "SIGTERM",
    };

    tracing::info!("{received} received, draining in-flight requests before exit");
}
