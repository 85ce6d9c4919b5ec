use clap::{Parser, ValueEnum};
use stocktake::{Config, InventoryStore, Listing};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `stock list`.
#[derive(Debug, Parser)]
pub struct List {
    /// Output format (default: plain).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One `[id] name (Stock: n)` line per item.
    #[default]
    Plain,
    /// Aligned columns with a header, plain lines on narrow terminals.
    Table,
    /// A JSON array of `{id, name, stock}` objects.
    Json,
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let store = InventoryStore::load(config.file())?;
        let listing = store.list();

        match self.output {
            OutputFormat::Plain => print_listing(&listing),
            OutputFormat::Table if is_narrow() => print_listing(&listing),
            OutputFormat::Table => print_table(&listing),
            OutputFormat::Json => {
                let entries: Vec<_> = listing.entries().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Ok(())
    }
}

/// Prints the listing the way the interactive form shows it.
pub fn print_listing(listing: &Listing<'_>) {
    if listing.is_empty() {
        println!("{}", listing.to_string().dim());
    } else {
        println!("{listing}");
    }
}

fn print_table(listing: &Listing<'_>) {
    if listing.is_empty() {
        println!("{}", listing.to_string().dim());
        return;
    }

    for line in render_table(listing) {
        println!("{line}");
    }
}

fn render_table(listing: &Listing<'_>) -> Vec<String> {
    let id_width = listing
        .entries()
        .map(|e| e.id().to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = listing
        .entries()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut lines = vec![format!(
        "{:>id_width$}  {:<name_width$}  Stock",
        "ID", "Name"
    )];
    lines.extend(listing.entries().map(|e| {
        format!(
            "{:>id_width$}  {:<name_width$}  {}",
            e.id(),
            e.name(),
            e.stock()
        )
    }));
    lines
}
