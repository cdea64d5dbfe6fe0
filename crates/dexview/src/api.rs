use std::ops::RangeInclusive;

use futures::future::join_all;
use indicatif::ProgressBar;

use crate::prelude::*;
use dexview_core::pokemon::{PokemonDetail, PokemonStub, RosterPage};

/// Roster window requested from the collection endpoint
pub const ROSTER_OFFSET: u32 = 0;
pub const ROSTER_LIMIT: u32 = 150;

/// Numeric ids covered by the sequential browse scan
pub const DEX_RANGE: RangeInclusive<u32> = 1..=150;

/// PokeAPI configuration from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Default PokeAPI base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";

    /// Load configuration from environment variables
    /// Uses POKEAPI_BASE_URL with default fallback
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn roster_url(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?offset={offset}&limit={limit}", self.base())
    }

    pub fn detail_url_for_id(&self, id: u32) -> String {
        format!("{}/pokemon/{id}", self.base())
    }

    pub fn detail_url_for_name(&self, name: &str) -> String {
        format!("{}/pokemon/{name}", self.base())
    }
}

/// Fetch one URL and decode its JSON body
///
/// Transport failures, non-success statuses and undecodable bodies map
/// to distinct error variants so callers can report the cause.
pub async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("GET {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Status(format!(
            "GET {url}: HTTP {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| Error::Parse(format!("GET {url}: {e}")))
}

/// Fetch one page of the roster listing
pub async fn fetch_roster(
    client: &reqwest::Client,
    config: &ApiConfig,
    offset: u32,
    limit: u32,
) -> Result<Vec<PokemonStub>, Error> {
    let url = config.roster_url(offset, limit);
    let page: RosterPage = fetch_json(client, &url).await?;
    Ok(page.results)
}

/// Fetch one detail record, swallowing failures
///
/// A failed fetch is logged and surfaced as `None`. Callers treat a
/// missing value as "skip this one", never as fatal.
pub async fn fetch_detail(client: &reqwest::Client, url: &str) -> Option<PokemonDetail> {
    match fetch_json(client, url).await {
        Ok(detail) => Some(detail),
        Err(err) => {
            log::warn!("skipping detail fetch: {err}");
            None
        }
    }
}

/// Fetch detail records for an id range, one request at a time
///
/// Scans ids in ascending order with one awaited call per id, so the
/// total latency is the sum of all round trips. Failed ids are skipped
/// without a placeholder and the rest keep their ascending order.
pub async fn fetch_range(
    client: &reqwest::Client,
    config: &ApiConfig,
    range: RangeInclusive<u32>,
    progress: Option<&ProgressBar>,
) -> Vec<PokemonDetail> {
    let mut details = Vec::new();

    for id in range {
        let url = config.detail_url_for_id(id);
        if let Some(detail) = fetch_detail(client, &url).await {
            details.push(detail);
        }
        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    details
}

/// Fetch detail records for every stub concurrently
///
/// Launches all requests together and waits for the whole batch to
/// settle. The result preserves stub order regardless of completion
/// order. If any single fetch fails the whole batch fails; there is no
/// per-item recovery on this path.
pub async fn fetch_all(
    client: &reqwest::Client,
    stubs: &[PokemonStub],
) -> Result<Vec<PokemonDetail>, Error> {
    let detail_futures = stubs.iter().map(|stub| fetch_json(client, &stub.url));
    join_all(detail_futures).await.into_iter().collect()
}
