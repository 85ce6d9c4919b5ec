use std::path::{Path, PathBuf};

mod config;
mod init;
mod interactive;
mod list;
mod terminal;

use clap::ArgAction;
use list::List;
use stocktake::{CONFIG_FILE, Config, InventoryStore};
use terminal::Colorize;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The configuration file
    #[arg(short, long, default_value = CONFIG_FILE, global = true)]
    config: PathBuf,

    /// The inventory file (overrides the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = Config::load_or_default(&self.config)?;
        if let Some(file) = self.file {
            config.set_file(file);
        }

        self.command
            .unwrap_or(Command::Run)
            .run(&self.config, &config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stderr keeps log lines out of the listing and the interactive form
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Manage the inventory interactively (default)
    Run,

    /// Write a default configuration file
    Init(init::Command),

    /// List the items in the inventory
    List(List),

    /// Add an item to the end of the inventory
    Add(Add),

    /// Delete an item
    ///
    /// Items are identified by their position in the listing. Deleting an
    /// item moves every later item up by one.
    Delete(Delete),

    /// Set the stock of an item
    ///
    /// Setting the stock to 0 deletes the item.
    Modify(Modify),

    /// Show the effective configuration
    Config,
}

impl Command {
    fn run(self, config_path: &Path, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Run => interactive::Session::open(config)?.run()?,
            Self::Init(command) => command.run(config_path)?,
            Self::List(command) => command.run(config)?,
            Self::Add(command) => command.run(config)?,
            Self::Delete(command) => command.run(config)?,
            Self::Modify(command) => command.run(config)?,
            Self::Config => config::show(config_path, config),
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// The name of the item
    name: String,

    /// The quantity in stock
    #[arg(allow_hyphen_values = true)]
    stock: String,
}

impl Add {
    #[instrument(skip(config))]
    fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut store = InventoryStore::load(config.file())?;
        let outcome = store.add(&self.name, &self.stock)?;
        println!("{}", outcome.to_string().success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Delete {
    /// The 1-based ID of the item, as shown by `stock list`
    #[arg(allow_hyphen_values = true)]
    id: String,
}

impl Delete {
    #[instrument(skip(config))]
    fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut store = InventoryStore::load(config.file())?;
        let outcome = store.delete(&self.id)?;
        println!("{}", outcome.to_string().success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Modify {
    /// The 1-based ID of the item, as shown by `stock list`
    #[arg(allow_hyphen_values = true)]
    id: String,

    /// The new quantity in stock
    #[arg(allow_hyphen_values = true)]
    stock: String,
}

impl Modify {
    #[instrument(skip(config))]
    fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut store = InventoryStore::load(config.file())?;
        let outcome = store.modify_stock(&self.id, &self.stock)?;
        println!("{}", outcome.to_string().success());
        Ok(())
    }
}
