use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use studio_core::{Catalog, ContentService, HttpContentSource, SiteConfig};

/// Main entry point for the studio content service
///
/// Resolves configuration once, then serves the REST API with OpenAPI/Swagger UI.
///
/// # Environment Variables
/// - `STUDIO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `STUDIO_CONTENT_URL`: CMS origin (default: "https://my-strapi-backend.fly.dev")
/// - `STUDIO_MEDIA_URL`: origin for relative media paths (default: the CMS origin)
/// - `STUDIO_SITE_CONFIG`: optional YAML file overriding site defaults
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the site config file cannot be read,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studio=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = SiteConfig::from_env_values(
        std::env::var("STUDIO_CONTENT_URL").ok(),
        std::env::var("STUDIO_MEDIA_URL").ok(),
        std::env::var("STUDIO_SITE_CONFIG").ok(),
    )?;
    let rest_addr = std::env::var("STUDIO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Content source {}", cfg.content_url());
    tracing::info!("++ Starting studio REST on {}", rest_addr);

    let service = ContentService::new(HttpContentSource::new(&cfg)?, Catalog::new(&cfg)?);
    let app = router(AppState::new(service, &cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
