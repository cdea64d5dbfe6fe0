use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};
use colored::Colorize;
use dexview_core::filter::filter_cards;
use dexview_core::page::{render_document, Container, MemoryPage};
use indicatif::{ProgressBar, ProgressStyle};

use super::{browser, gallery, picker, StderrNotifier};

#[derive(Debug, clap::Args, Clone)]
pub struct PageOptions {
    /// Write the document to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Apply a filter to the browse section before rendering
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Run every view against one shared page and emit it as a document
pub async fn run(options: PageOptions, global: crate::Global) -> Result<()> {
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

    let client = reqwest::Client::new();
    let mut page = MemoryPage::new();
    let mut notifier = StderrNotifier;

    spinner.set_message("Loading the picker roster...");
    picker::populate(&client, &config, &mut page, &mut notifier).await;

    spinner.set_message("Loading the gallery...");
    gallery::render(&client, &config, &mut page).await;

    spinner.set_message("Scanning ids one by one...");
    browser::render(&client, &config, &mut page, api::DEX_RANGE, None).await;

    spinner.finish_and_clear();

    if let Some(query) = options.query.as_deref() {
        filter_cards(&mut page, Container::Browser, query);
    }

    let html = render_document(&page, chrono::Utc::now());

    match &options.output {
        Some(path) => {
            std::fs::write(path, html).context("Failed to write the document")?;
            println!("{} {}", "Wrote".green(), path.display().to_string().cyan());
        }
        None => print!("{html}"),
    }

    Ok(())
}
