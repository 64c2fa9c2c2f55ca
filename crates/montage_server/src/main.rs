use clap::Parser;
use montage_error::HttpError;
use montage_models::{FalClient, GeminiClient};
use montage_pipeline::MontagePipeline;
use montage_server::{AppState, MontageConfig, ObservabilityConfig, create_router, init_observability};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Montage generation HTTP service", long_about = None)]
struct Args {
    /// Configuration file layered over the defaults
    #[arg(short, long, env = "MONTAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let observability = ObservabilityConfig::new("montage-server").with_json_logs(args.json_logs);
    let observability = if args.verbose {
        observability.with_log_level("debug")
    } else {
        observability
    };
    init_observability(&observability)?;

    let mut config = MontageConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    config.warn_missing_credentials();

    let text = GeminiClient::new(config.gemini_config())?;
    let images = FalClient::new(config.fal_config()?);
    let pipeline = MontagePipeline::new(text, images, config.pipeline_settings()?);
    let app = create_router(AppState::new(pipeline));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", addr, e)))?;

    info!(
        addr = %addr,
        text_model = %config.generation.model,
        image_model = %config.images.model,
        max_segments = config.pipeline.max_segments,
        fan_out_policy = %config.pipeline.fan_out_policy,
        "Montage server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;

    info!("Montage server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
