use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Notify;
use tracing::{info, warn};

use aeval_advisor::{ChatService, EvaluationAdvisor};
use aeval_catalog::CatalogProvider;
use aeval_llm::HttpLlmClient;
use aeval_server::api::{self, AppState};
use aeval_server::config::AevalConfig;
use aeval_server::error::ServerError;
use aeval_server::telemetry;

/// AEval evaluation configuration assistant.
#[derive(Parser, Debug)]
#[command(name = "aeval-server", about = "HTTP server for the AEval chat assistant")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "aeval.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    telemetry::init();

    let mut config = AevalConfig::load(Path::new(&cli.config))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let llm = HttpLlmClient::new(config.llm.client_config())
        .map_err(|e| ServerError::Config(e.to_string()))?;
    info!(
        endpoint = %config.llm.endpoint,
        model = %config.llm.model,
        "LLM client configured"
    );

    let catalog = Arc::new(CatalogProvider::new(&config.catalog.data_dir));
    info!(data_dir = %catalog.data_dir().display(), "catalog provider configured");

    let chat = ChatService::new(catalog, EvaluationAdvisor::new(Arc::new(llm)));
    let state = AppState {
        chat: Arc::new(chat),
        allowed_origins: config.cors.origin_headers()?,
    };
    let app = api::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "aeval-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM, bounded by the
    // configured drain timeout.
    let stopping = Arc::new(Notify::new());
    let trigger = Arc::clone(&stopping);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                trigger.notify_one();
            })
            .await
    };
    let grace = Duration::from_secs(config.server.shutdown_timeout_seconds);
    let deadline = async {
        stopping.notified().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => result?,
        () = deadline => {
            warn!(timeout_seconds = grace.as_secs(), "in-flight requests did not drain in time");
        }
    }

    info!("aeval-server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
