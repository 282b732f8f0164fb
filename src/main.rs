use anyhow::{Context, Result};
use clap::Parser;
use listing_scout::config::{ListingConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use listing_scout::controller::{FetchStatus, ListingController};
use listing_scout::kiosk;
use listing_scout::listings::{FilterCriteria, FilterField, ListingClient, ListingSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "listing-scout")]
#[command(about = "Browse marketplace property listings from the terminal")]
struct Cli {
    /// Base URL of the marketplace API
    #[arg(long, env = "LISTING_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Bearer token sent with every request
    #[arg(long, env = "LISTING_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// Initial search text
    #[arg(long)]
    search: Option<String>,
    /// Initial filter, e.g. `--filter min-price=200000 --filter type=condo`
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(FilterField, String)>,
    /// Page to open after the first load
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Print one page and exit instead of starting the kiosk
    #[arg(long)]
    once: bool,
    /// With --once, also save the loaded properties as JSON
    #[arg(long, requires = "once")]
    output: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ListingConfig {
        ListingConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria {
            search_text: self.search.clone().unwrap_or_default(),
            ..Default::default()
        };
        for (field, value) in &self.filters {
            criteria.set(*field, value.clone());
        }
        criteria
    }
}

fn parse_filter(raw: &str) -> Result<(FilterField, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", raw))?;
    Ok((field.parse()?, value.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = ListingClient::new(&cli.config())?;
    info!("🏠 Listing Scout - {} at {}", client.source_name(), client.endpoint());

    let controller = ListingController::with_criteria(client, cli.criteria());
    controller.load().await;
    if cli.page > 1 {
        controller.set_page(cli.page).await;
    }

    if !cli.once {
        return kiosk::run(&controller).await;
    }

    let view = controller.view();
    print!("{}", kiosk::render::render_view(&view));

    if let Some(path) = &cli.output {
        if view.status == FetchStatus::Success {
            let json = serde_json::to_string_pretty(&view.items)?;
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Saved {} properties to {}", view.items.len(), path.display());
        } else {
            warn!("Nothing saved; the listing request did not succeed");
        }
    }

    Ok(())
}
