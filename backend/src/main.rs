use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use metfab_site::{AppState, config::Config, create_router};

#[derive(Parser, Debug)]
#[command(name = "metfab-site", about = "MetFab multilingual marketing site backend")]
struct Args {
    /// Path to config.toml (default: search conf/config.toml, config.toml)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load_from(args.config.as_deref())?;

    // Keep the appender guard alive for the process lifetime
    let _log_guard = init_tracing(&config);

    tracing::info!(
        "Starting metfab-site ({:?}, base_url={})",
        config.site.environment,
        config.site.base_url
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("Server error")?;

    Ok(())
}

fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    match &config.logging.file {
        Some(path) => {
            let directory = std::path::Path::new(path)
                .parent()
                .map_or_else(|| "logs".to_string(), |p| p.display().to_string());
            let file_name = std::path::Path::new(path)
                .file_name()
                .map_or_else(|| "metfab-site.log".to_string(), |f| {
                    f.to_string_lossy().to_string()
                });
            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
