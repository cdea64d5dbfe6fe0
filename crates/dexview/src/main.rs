#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod api;
mod error;
mod prelude;
mod view;

#[cfg(test)]
mod testutil;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch Pokemon from the PokeAPI and render them as cards"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Override for the PokeAPI base URL
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "DEXVIEW_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pick one Pokemon from the roster and render its card
    Pick(view::picker::PickOptions),

    /// Render the full roster with one concurrent batch fetch
    Gallery(view::gallery::GalleryOptions),

    /// Render the roster one fetch at a time, with an optional text filter
    Browse(view::browser::BrowseOptions),

    /// Write every view into a standalone HTML document
    Page(view::page::PageOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Pick(options) => crate::view::picker::run(options, app.global).await,
        SubCommands::Gallery(options) => crate::view::gallery::run(options, app.global).await,
        SubCommands::Browse(options) => crate::view::browser::run(options, app.global).await,
        SubCommands::Page(options) => crate::view::page::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
