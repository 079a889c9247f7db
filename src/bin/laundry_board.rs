//! Logs the laundry board as seen by the remote authority.
//!
//! Usage:
//!
//! ```text
//! laundry-board [--config <path>] [--suggest <context>] [query...]
//! ```
//!
//! The board probes the authority's health, loads the suggestion provider
//! registry, refreshes the item snapshot and logs one line per status
//! bucket for the items matching `query`. With `--suggest`, a wash
//! suggestion for `context` is requested as well.

use laundry_ai::{
    api::{ApiClient, ApiError},
    config::{ClientConfig, ConfigError},
    item::{
        adapters::HttpItemAuthority,
        services::ItemStore,
        view::{ItemQuery, ItemSelection, ItemView},
    },
    suggestion::{
        adapters::HttpSuggestionBackend, domain::ProviderId, services::SuggestionGateway,
    },
    telemetry::{self, TelemetryError},
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
enum BoardError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Default)]
struct BoardArgs {
    config: Option<PathBuf>,
    suggest: Option<String>,
    query: Vec<String>,
}

impl BoardArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, BoardError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| BoardError::Usage("--config needs a path".to_owned()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--suggest" => {
                    let context = args
                        .next()
                        .ok_or_else(|| BoardError::Usage("--suggest needs a context".to_owned()))?;
                    parsed.suggest = Some(context);
                }
                _ => parsed.query.push(arg),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<(), BoardError> {
    let args = BoardArgs::parse(std::env::args().skip(1))?;
    let config = ClientConfig::load(args.config.as_deref())?;
    telemetry::init(config.log_filter())?;

    let client = ApiClient::new(&config)?;
    let health = client.health().await;
    info!(base_url = %client.base_url(), %health, "authority probed");

    let gateway = SuggestionGateway::new(Arc::new(HttpSuggestionBackend::new(client.clone())));
    if let Ok(registry) = gateway.load_providers().await {
        let providers: Vec<&str> = registry.providers().iter().map(ProviderId::as_str).collect();
        info!(?providers, active = ?gateway.active_provider(), "suggestion providers");
    }

    let store = ItemStore::new(Arc::new(HttpItemAuthority::new(client)));
    let items = store.refresh().await;
    if let Some(failure) = store.refresh_failure() {
        warn!(error = %failure, "showing an empty board");
    }

    let query = ItemQuery::new(&args.query.join(" "));
    let view = ItemView::derive(&items, &query, &ItemSelection::new());
    for (status, bucket) in view.buckets().iter() {
        let labels: Vec<&str> = bucket.iter().map(|item| item.label().as_str()).collect();
        info!(%status, count = bucket.len(), ?labels, "bucket");
    }
    info!(query = query.as_str(), total = view.total_filtered(), "board derived");

    if let Some(context) = args.suggest {
        match gateway.suggest(&context).await {
            Ok(suggestion) => info!(
                text = suggestion.text(),
                provider = ?gateway.active_provider(),
                "suggestion"
            ),
            Err(err) => warn!(message = %err.user_message(), "suggestion unavailable"),
        }
    }
    Ok(())
}
