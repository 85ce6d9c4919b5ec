use std::path::Path;

use stocktake::Config;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Inventory file to record in the new configuration
    #[arg(long, value_name = "PATH")]
    inventory: Option<std::path::PathBuf>,

    /// Ask for confirmation before deleting items in the interactive form
    #[arg(long)]
    confirm_delete: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Already initialized (found existing {})",
                config_path.display()
            );
        }

        let mut config = Config::default();
        if let Some(inventory) = self.inventory {
            config.set_file(inventory);
        }
        config.confirm_delete = self.confirm_delete;

        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!("Created {}", config_path.display());
        println!("  Inventory file: {}", config.file().display());
        println!();
        println!("Next steps:");
        println!("  stock add \"Widget\" 5");
        println!("  stock");

        Ok(())
    }
}
