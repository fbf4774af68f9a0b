use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studio_core::{
    read_raw, Catalog, ContentService, HttpContentSource, SiteConfig, ViewKind, ViewPayload,
};

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Laserstudio Marie content CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every view name
    Views,
    /// Print the CMS request a view issues
    Populate {
        /// View name, as listed by `studio views`
        view: String,
    },
    /// Fetch a view from the CMS and print it normalized
    Fetch {
        /// View name, as listed by `studio views`
        view: String,
    },
    /// Normalize a saved CMS response without network access
    Normalize {
        /// View name, as listed by `studio views`
        view: String,
        /// JSON file holding the raw response body
        file: PathBuf,
    },
}

/// Resolve configuration from the same environment variables as the server.
fn site_config() -> Result<SiteConfig, Box<dyn std::error::Error>> {
    Ok(SiteConfig::from_env_values(
        std::env::var("STUDIO_CONTENT_URL").ok(),
        std::env::var("STUDIO_MEDIA_URL").ok(),
        std::env::var("STUDIO_SITE_CONFIG").ok(),
    )?)
}

fn print_payload(payload: &ViewPayload) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&payload.to_json())?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Views) => {
            for kind in ViewKind::ALL {
                println!("{:<14} {}", kind.name(), kind.collection());
            }
        }
        Some(Commands::Populate { view }) => {
            let cfg = site_config()?;
            let catalog = Catalog::new(&cfg)?;
            let def = catalog.by_name(&view)?;
            println!("{}{}", cfg.content_url(), def.query().display_path());
        }
        Some(Commands::Fetch { view }) => {
            let cfg = site_config()?;
            let kind = ViewKind::from_name(&view)?;
            let service = ContentService::new(HttpContentSource::new(&cfg)?, Catalog::new(&cfg)?);
            match service.load(kind).await {
                Ok(payload) => print_payload(&payload)?,
                Err(e) => {
                    eprintln!("Error fetching {view}: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Normalize { view, file }) => {
            let cfg = site_config()?;
            let catalog = Catalog::new(&cfg)?;
            let def = catalog.by_name(&view)?;
            let raw = read_raw(&file)?;
            match def.normalize(&raw) {
                Ok(payload) => print_payload(&payload)?,
                Err(e) => {
                    eprintln!("Error normalizing {}: {e}", file.display());
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("Use 'studio --help' for commands");
        }
    }

    Ok(())
}
