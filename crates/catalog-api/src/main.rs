//! # Partner Catalog
//!
//! Partner-facing product catalog API.
//!
//! ## Usage
//!
//! ```bash
//! # Select a profile and signing key
//! export ENVIRONMENT=production
//! export SECRET_KEY=change-me
//!
//! # Run the server
//! partner-catalog
//! ```

use catalog_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Fails fast in production without SECRET_KEY
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!(debug = state.config.debug, "Environment: {}", state.config.environment);
    info!("Partners loaded: {}", state.partners.len());

    let app = routes::create_router(state);

    info!("Partner catalog starting on http://{}", addr);

    if !is_prod {
        info!("Login: POST http://{}/auth/login", addr);
        info!("Products: GET http://{}/produtos", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Partner Catalog API
  ━━━━━━━━━━━━━━━━━━━━━━━
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
