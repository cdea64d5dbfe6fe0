use crate::prelude::{eprintln, *};
use colored::Colorize;
use dexview_core::page::Notifier;
use dexview_core::pokemon::CardSummary;

pub mod browser;
pub mod gallery;
pub mod page;
pub mod picker;

/// Fixed message shown when the roster cannot be loaded
pub const ROSTER_ERROR: &str = "Error fetching Pokémon list. Please try again later.";

/// Fixed message shown when a picked detail record cannot be loaded
pub const DETAIL_ERROR: &str = "Error fetching Pokémon details. Please try again later.";

/// Notifier that interrupts the user on stderr
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}

/// Render card summaries as a terminal table
pub fn card_table(summaries: &[CardSummary]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Name", "Types", "Artwork"]);

    for (idx, summary) in summaries.iter().enumerate() {
        let artwork = if summary.image.is_empty() {
            "(none)".bright_black()
        } else {
            summary.image.bright_black()
        };
        table.add_row(prettytable::row![
            (idx + 1).to_string().yellow(),
            summary.title.white().bold(),
            summary.subtitle.cyan(),
            artwork
        ]);
    }

    table
}
