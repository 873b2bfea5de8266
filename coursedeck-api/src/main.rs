//! coursedeck-api - Course catalog and learning dashboard backend
//!
//! Serves the catalog browse/search/recommendation surfaces plus the user,
//! progress, review, and admin CRUD endpoints, all backed by a remote JSON
//! document store.

use anyhow::Result;
use clap::Parser;
use coursedeck_api::{build_router, AppState};
use coursedeck_catalog::HttpCourseStore;
use coursedeck_common::config::resolve_settings;
use std::sync::Arc;
use tracing::info;

/// Command-line options (highest-priority settings tier)
#[derive(Debug, Parser)]
#[command(name = "coursedeck-api", about = "Course catalog HTTP service")]
struct Cli {
    /// Base URL of the remote document store
    #[arg(long)]
    store_url: Option<String>,

    /// HTTP listen port
    #[arg(long)]
    port: Option<u16>,

    /// Admin bearer token (empty disables admin auth)
    #[arg(long)]
    admin_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification IMMEDIATELY after tracing init for instant
    // startup feedback before any network delays
    info!(
        "Starting Coursedeck API (coursedeck-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let settings = resolve_settings(
        cli.store_url.as_deref(),
        cli.port,
        cli.admin_token.as_deref(),
    )?;

    info!("Document store: {}", settings.store_url);
    if settings.admin_token.is_empty() {
        info!("Admin authentication disabled (no admin token configured)");
    } else {
        info!("✓ Admin authentication enabled");
    }

    let store = HttpCourseStore::new(&settings.store_url)
        .map_err(|e| anyhow::anyhow!("Failed to create store client: {}", e))?;

    let state = AppState::new(Arc::new(store), settings.admin_token.clone());
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind(("127.0.0.1", settings.port)).await?;
    info!(
        "coursedeck-api listening on http://127.0.0.1:{}",
        settings.port
    );
    info!(
        "Health check: http://127.0.0.1:{}/health",
        settings.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
