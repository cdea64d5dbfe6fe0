use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};
use colored::Colorize;
use dexview_core::card::{render_card, render_options};
use dexview_core::page::{Container, MemoryPage, Notifier, RenderTarget};
use dexview_core::pokemon::{dex_number, summarize, CardSummary, PokemonDetail, PokemonStub};

use super::{StderrNotifier, DETAIL_ERROR, ROSTER_ERROR};

#[derive(Debug, clap::Args, Clone)]
pub struct PickOptions {
    /// Pokemon to pick: a roster name, a numeric id, or a detail URL.
    /// Omit to list the roster instead.
    #[arg(value_name = "POKEMON")]
    pub pokemon: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the rendered card markup
    #[arg(long)]
    pub html: bool,
}

/// Load the roster into the picker options
///
/// On failure the user is notified, the cause is logged and an empty
/// roster is returned; the options container keeps its prior content.
pub async fn populate(
    client: &reqwest::Client,
    config: &ApiConfig,
    page: &mut dyn RenderTarget,
    notifier: &mut dyn Notifier,
) -> Vec<PokemonStub> {
    match api::fetch_roster(client, config, api::ROSTER_OFFSET, api::ROSTER_LIMIT).await {
        Ok(stubs) => {
            page.set_content(Container::PickerOptions, render_options(&stubs));
            stubs
        }
        Err(err) => {
            notifier.notify(ROSTER_ERROR);
            log::error!("fetching roster: {err}");
            Vec::new()
        }
    }
}

/// Fetch the selected detail record and render its card
///
/// On failure the user is notified, the cause is logged and the
/// results container keeps its prior content.
pub async fn submit(
    client: &reqwest::Client,
    detail_url: &str,
    page: &mut dyn RenderTarget,
    notifier: &mut dyn Notifier,
) -> Option<CardSummary> {
    match api::fetch_json::<PokemonDetail>(client, detail_url).await {
        Ok(detail) => {
            let summary = summarize(&detail);
            page.set_content(Container::PickerResults, render_card(&summary));
            Some(summary)
        }
        Err(err) => {
            notifier.notify(DETAIL_ERROR);
            log::error!("fetching picked detail: {err}");
            None
        }
    }
}

/// Resolve the user's pick to a detail URL
///
/// Accepts a full URL, a numeric id, or a name. Names are matched
/// case-insensitively against the roster first, so the resolved URL is
/// the one the corresponding option would carry.
pub fn resolve_selection(config: &ApiConfig, stubs: &[PokemonStub], input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }

    if let Ok(id) = input.parse::<u32>() {
        return config.detail_url_for_id(id);
    }

    let name = input.to_lowercase();
    stubs
        .iter()
        .find(|stub| stub.name == name)
        .map(|stub| stub.url.clone())
        .unwrap_or_else(|| config.detail_url_for_name(&name))
}

pub async fn run(options: PickOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::from_env().with_overrides(global.base_url.clone());

    if global.verbose {
        println!("PokeAPI Base: {}", config.base_url);
        println!();
    }

    let client = reqwest::Client::new();
    let mut page = MemoryPage::new();
    let mut notifier = StderrNotifier;

    let stubs = populate(&client, &config, &mut page, &mut notifier).await;

    let Some(input) = options.pokemon.as_deref() else {
        return output_roster(&stubs, &page, &options);
    };

    let detail_url = resolve_selection(&config, &stubs, input);
    match submit(&client, &detail_url, &mut page, &mut notifier).await {
        Some(summary) => output_card(&summary, &page, &options),
        // The notification already went out; the process stays alive.
        None => Ok(()),
    }
}

fn output_roster(stubs: &[PokemonStub], page: &MemoryPage, options: &PickOptions) -> Result<()> {
    if options.json {
        let json = serde_json::to_string_pretty(stubs)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if options.html {
        print!("{}", page.content(Container::PickerOptions));
        return Ok(());
    }

    if stubs.is_empty() {
        println!("{}", "The roster is empty.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Name"]);
    for stub in stubs {
        let number = dex_number(&stub.url)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(prettytable::row![
            number.yellow(),
            stub.name.white().bold()
        ]);
    }
    table.printstd();

    println!();
    println!(
        "{}: {}",
        "To render a card".bright_white().bold(),
        "dexview pick <name>".cyan()
    );
    Ok(())
}

fn output_card(summary: &CardSummary, page: &MemoryPage, options: &PickOptions) -> Result<()> {
    if options.json {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if options.html {
        print!("{}", page.content(Container::PickerResults));
        return Ok(());
    }

    println!();
    println!("{}", summary.title.to_uppercase().bright_cyan().bold());
    println!("{}", "=".repeat(40).bright_cyan());
    println!("{}: {}", "Types".green(), summary.subtitle.cyan());
    if summary.image.is_empty() {
        println!("{}: {}", "Artwork".green(), "(none)".bright_black());
    } else {
        println!(
            "{}: {}",
            "Artwork".green(),
            summary.image.cyan().underline()
        );
    }
    println!();
    Ok(())
}
