use std::ops::RangeInclusive;

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};
use colored::Colorize;
use dexview_core::card::render_cards;
use dexview_core::filter::filter_cards;
use dexview_core::page::{Container, MemoryPage, RenderTarget};
use dexview_core::pokemon::{summarize_all, CardSummary};
use indicatif::{ProgressBar, ProgressStyle};

use super::card_table;

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Show only cards whose text contains this string (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the rendered card list markup
    #[arg(long)]
    pub html: bool,
}

/// Scan an id range one fetch at a time and render every card found
///
/// Failed ids are skipped, so the rendered list can be shorter than
/// the range; the rest keep ascending id order. The container is
/// always rewritten, even when nothing was fetched.
pub async fn render(
    client: &reqwest::Client,
    config: &ApiConfig,
    page: &mut dyn RenderTarget,
    range: RangeInclusive<u32>,
    progress: Option<&ProgressBar>,
) -> Vec<CardSummary> {
    let details = api::fetch_range(client, config, range, progress).await;
    let summaries = summarize_all(&details);
    page.set_content(Container::Browser, render_cards(&summaries));
    summaries
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::from_env().with_overrides(global.base_url.clone());

    if global.verbose {
        println!("PokeAPI Base: {}", config.base_url);
        println!();
    }

    let bar = ProgressBar::new(api::DEX_RANGE.count() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap(),
    );
    bar.set_message("Fetching cards one by one...");

    let client = reqwest::Client::new();
    let mut page = MemoryPage::new();
    let summaries = render(&client, &config, &mut page, api::DEX_RANGE, Some(&bar)).await;

    bar.finish_and_clear();

    if let Some(query) = options.query.as_deref() {
        filter_cards(&mut page, Container::Browser, query);
    }

    output(&summaries, &page, &options)
}

fn output(summaries: &[CardSummary], page: &MemoryPage, options: &BrowseOptions) -> Result<()> {
    let visible: Vec<CardSummary> = page
        .query_all(Container::Browser, ".card")
        .iter()
        .filter(|card| !card.hidden)
        .filter_map(|card| summaries.get(card.index).cloned())
        .collect();

    if options.json {
        let json = serde_json::to_string_pretty(&visible)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if options.html {
        print!("{}", page.content(Container::Browser));
        return Ok(());
    }

    if visible.is_empty() {
        println!("{}", "No cards to show.".yellow());
        return Ok(());
    }

    card_table(&visible).printstd();

    if options.query.is_some() {
        println!();
        println!(
            "{} {} {} {}",
            "Showing".bright_white(),
            visible.len().to_string().bright_cyan().bold(),
            "of".bright_white(),
            summaries.len().to_string().bright_cyan().bold()
        );
    }
    Ok(())
}
