//! cdnjs API server
//!
//! Serves the read-only library catalog API over an in-memory or hosted index.

use clap::Parser;
use cdnjs_rest::{IndexBackendKind, ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "memory")]
use cdnjs_index::backends::memory::InMemoryIndex;

#[cfg(feature = "algolia")]
use cdnjs_index::backends::algolia::{AlgoliaBackend, AlgoliaConfig};

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        index_backend = %config.index_backend,
        cdn_base = %config.cdn_base(),
        "Starting cdnjs API server"
    );

    match config.index_backend {
        IndexBackendKind::Memory => start_memory(config).await,
        IndexBackendKind::Algolia => start_algolia(config).await,
    }
}

/// Starts the server over a catalog file loaded into memory.
#[cfg(feature = "memory")]
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    let path = config
        .catalog_path
        .clone()
        .ok_or_else(|| anyhow::anyhow!("The memory backend requires CDNJS_API_CATALOG_PATH"))?;

    info!(catalog = %path.display(), "Initializing in-memory index");
    let index = InMemoryIndex::from_catalog_file(&path).await?;

    let app = create_app_with_config(index, config.clone());
    serve(app, &config).await
}

/// Fallback when memory feature is not enabled.
#[cfg(not(feature = "memory"))]
async fn start_memory(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The memory backend requires the 'memory' feature. \
         Build with: cargo build -p cdnjs-api --features memory"
    )
}

/// Starts the server over the hosted index.
#[cfg(feature = "algolia")]
async fn start_algolia(config: ServerConfig) -> anyhow::Result<()> {
    let (Some(app_id), Some(api_key)) = (&config.algolia_app_id, &config.algolia_api_key) else {
        anyhow::bail!("The algolia backend requires ALGOLIA_APP_ID and ALGOLIA_API_KEY");
    };

    let algolia_config = AlgoliaConfig::new(app_id, api_key, &config.algolia_index)
        .with_timeout(config.provider_timeout)
        .with_page_size(config.provider_page_size);

    info!(
        index = %algolia_config.index_name,
        host = %algolia_config.base_url(),
        timeout_ms = config.provider_timeout.as_millis() as u64,
        "Initializing hosted index backend"
    );

    let backend = AlgoliaBackend::new(algolia_config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when algolia feature is not enabled.
#[cfg(not(feature = "algolia"))]
async fn start_algolia(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The algolia backend requires the 'algolia' feature. \
         Build with: cargo build -p cdnjs-api --features algolia"
    )
}
