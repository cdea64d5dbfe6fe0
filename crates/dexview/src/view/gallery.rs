use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};
use colored::Colorize;
use dexview_core::card::render_cards;
use dexview_core::page::{Container, MemoryPage, RenderTarget};
use dexview_core::pokemon::{summarize_all, CardSummary};
use indicatif::{ProgressBar, ProgressStyle};

use super::card_table;

#[derive(Debug, clap::Args, Clone)]
pub struct GalleryOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the rendered card list markup
    #[arg(long)]
    pub html: bool,
}

/// Load the whole roster with one concurrent batch and render it
///
/// Every request is launched together, so one failing fetch fails the
/// whole batch. Failures on this path are logged without notifying the
/// user and leave the container untouched.
pub async fn render(
    client: &reqwest::Client,
    config: &ApiConfig,
    page: &mut dyn RenderTarget,
) -> Vec<CardSummary> {
    let stubs =
        match api::fetch_roster(client, config, api::ROSTER_OFFSET, api::ROSTER_LIMIT).await {
            Ok(stubs) => stubs,
            Err(err) => {
                log::error!("fetching roster: {err}");
                return Vec::new();
            }
        };

    let details = match api::fetch_all(client, &stubs).await {
        Ok(details) => details,
        Err(err) => {
            log::error!("fetching card batch: {err}");
            return Vec::new();
        }
    };

    let summaries = summarize_all(&details);
    page.set_content(Container::Gallery, render_cards(&summaries));
    summaries
}

pub async fn run(options: GalleryOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::from_env().with_overrides(global.base_url.clone());

    if global.verbose {
        println!("PokeAPI Base: {}", config.base_url);
        println!();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message("Fetching the whole roster at once...");

    let client = reqwest::Client::new();
    let mut page = MemoryPage::new();
    let summaries = render(&client, &config, &mut page).await;

    spinner.finish_and_clear();

    output(&summaries, &page, &options)
}

fn output(summaries: &[CardSummary], page: &MemoryPage, options: &GalleryOptions) -> Result<()> {
    if options.json {
        let json = serde_json::to_string_pretty(summaries)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if options.html {
        print!("{}", page.content(Container::Gallery));
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No cards to show.".yellow());
        return Ok(());
    }

    card_table(summaries).printstd();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{detail_json, json_ok, roster_json, serve, server_error};
    use axum::Router;
    use dexview_core::card::render_card;

    fn test_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
        }
    }

    fn three_detail_routes(router: Router) -> Router {
        router
            .route(
                "/pokemon/1",
                json_ok(detail_json(1, "bulbasaur", "1.png", &["grass", "poison"])),
            )
            .route(
                "/pokemon/4",
                json_ok(detail_json(4, "charmander", "4.png", &["fire"])),
            )
            .route(
                "/pokemon/7",
                json_ok(detail_json(7, "squirtle", "7.png", &["water"])),
            )
    }

    #[tokio::test]
    async fn test_render_produces_three_cards_in_stub_order() {
        // The roster urls are filled in once the stub server address
        // is known, so the router is built in two steps.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let router = three_detail_routes(Router::new().route(
            "/pokemon",
            json_ok(roster_json(&[
                ("bulbasaur", &format!("{base}/pokemon/1")),
                ("charmander", &format!("{base}/pokemon/4")),
                ("squirtle", &format!("{base}/pokemon/7")),
            ])),
        ));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let client = reqwest::Client::new();
        let mut page = MemoryPage::new();

        let summaries = render(&client, &test_config(&base), &mut page).await;

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].title, "bulbasaur");
        assert_eq!(summaries[1].title, "charmander");
        assert_eq!(summaries[2].title, "squirtle");

        let markup = page.content(Container::Gallery);
        assert_eq!(markup.matches(r#"<li class="card">"#).count(), 3);
        let expected: String = summaries.iter().map(render_card).collect();
        assert_eq!(markup, expected);
    }

    #[tokio::test]
    async fn test_render_one_failed_fetch_fails_the_batch() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let router = Router::new()
            .route(
                "/pokemon",
                json_ok(roster_json(&[
                    ("bulbasaur", &format!("{base}/pokemon/1")),
                    ("charmander", &format!("{base}/pokemon/4")),
                ])),
            )
            .route(
                "/pokemon/1",
                json_ok(detail_json(1, "bulbasaur", "1.png", &["grass"])),
            )
            .route("/pokemon/4", server_error());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let client = reqwest::Client::new();
        let mut page = MemoryPage::new();

        let summaries = render(&client, &test_config(&base), &mut page).await;

        assert!(summaries.is_empty());
        assert_eq!(page.content(Container::Gallery), "");
    }

    #[tokio::test]
    async fn test_render_roster_failure_degrades_to_empty() {
        let router = Router::new().route("/pokemon", server_error());
        let base = serve(router).await;
        let client = reqwest::Client::new();
        let mut page = MemoryPage::new();

        let summaries = render(&client, &test_config(&base), &mut page).await;

        assert!(summaries.is_empty());
        assert_eq!(page.content(Container::Gallery), "");
    }

    #[tokio::test]
    async fn test_render_empty_roster_writes_empty_gallery() {
        let router = Router::new().route("/pokemon", json_ok(roster_json(&[])));
        let base = serve(router).await;
        let client = reqwest::Client::new();
        let mut page = MemoryPage::new();

        let summaries = render(&client, &test_config(&base), &mut page).await;

        assert!(summaries.is_empty());
        assert_eq!(page.content(Container::Gallery), "");
        assert!(page.query_all(Container::Gallery, ".card").is_empty());
    }
}
